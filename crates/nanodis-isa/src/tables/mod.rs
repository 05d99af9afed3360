//! Reference decode tables.
//!
//! [`MAJOR`] is the root: it dispatches on instruction length to the 48-bit,
//! 32-bit and 16-bit maps. Every other pool holds entries of one width.

mod p16;
mod p32;
mod p48;

pub use p16::P16;
pub use p32::P32;
pub use p48::P48I;

use crate::node::{DecodeNode, Pool};

/// Root pool.
///
/// `P48I` comes first so its major opcode is claimed before the 32-bit map
/// sees it.
pub static MAJOR: Pool = Pool {
    name: "MAJOR",
    entries: &[
        DecodeNode::pool("P48I", 48, 0xfc00_0000_0000, 0x6000_0000_0000, &P48I),
        DecodeNode::pool("P32", 32, 0x1000_0000, 0x0000_0000, &P32),
        DecodeNode::pool("P16", 16, 0x1000, 0x1000, &P16),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::LeafContext;
    use crate::node::{Category, Payload};
    use rustc_hash::{FxHashMap, FxHashSet};

    fn walk(pool: &'static Pool, visit: &mut impl FnMut(&'static Pool, &'static DecodeNode)) {
        for entry in pool.entries {
            visit(pool, entry);
            if let Payload::Pool(child) = entry.payload {
                walk(child, visit);
            }
        }
    }

    fn entries() -> Vec<(&'static Pool, &'static DecodeNode)> {
        let mut all = Vec::new();
        walk(&MAJOR, &mut |pool, entry| all.push((pool, entry)));
        all
    }

    #[test]
    fn test_masks_and_values() {
        for (pool, entry) in entries() {
            assert!(
                matches!(entry.bit_width, 16 | 32 | 48),
                "{}/{}: width {}",
                pool.name,
                entry.name,
                entry.bit_width
            );
            let at = format!("{}/{}", pool.name, entry.name);
            assert_eq!(entry.value & !entry.mask, 0, "{at}: value outside mask");
            assert_eq!(entry.mask >> entry.bit_width, 0, "{at}: mask wider than entry");
        }
    }

    #[test]
    fn test_payloads_match_categories() {
        for (pool, entry) in entries() {
            match (entry.category, entry.payload) {
                (Category::Pool, Payload::Pool(_)) | (Category::Reserved, Payload::None) => {}
                (category, Payload::Leaf(leaf)) if category.is_terminal() => {
                    assert_eq!(leaf.name, entry.name);
                }
                (category, _) => {
                    panic!("{}/{}: {category:?} with wrong payload", pool.name, entry.name)
                }
            }
        }
    }

    #[test]
    fn test_pool_widths() {
        assert_eq!(MAJOR.bit_width(), None);
        for (_, entry) in entries() {
            if let Payload::Pool(child) = entry.payload {
                assert_eq!(child.bit_width(), Some(entry.bit_width), "{}", child.name);
            }
        }
    }

    fn pools() -> Vec<&'static Pool> {
        let mut seen = FxHashSet::default();
        let mut pools = vec![&MAJOR];
        walk(&MAJOR, &mut |_, entry| {
            if let Payload::Pool(child) = entry.payload {
                if seen.insert(std::ptr::from_ref(child)) {
                    pools.push(child);
                }
            }
        });
        pools
    }

    #[test]
    fn test_pool_names_unique() {
        let mut by_name: FxHashMap<&str, *const Pool> = FxHashMap::default();
        for pool in pools() {
            let ptr = std::ptr::from_ref(pool);
            assert_eq!(*by_name.entry(pool.name).or_insert(ptr), ptr, "{}", pool.name);
        }
    }

    #[test]
    fn test_no_shadowed_entries() {
        for pool in pools() {
            for (j, later) in pool.entries.iter().enumerate() {
                for earlier in &pool.entries[..j] {
                    let covers = earlier.guard.is_none()
                        && earlier.mask & !later.mask == 0
                        && later.value & earlier.mask == earlier.value;
                    assert!(
                        !covers,
                        "{}: {} is unreachable behind {}",
                        pool.name, later.name, earlier.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_leaves_render_base_encoding() {
        for (_, entry) in entries() {
            if let Payload::Leaf(leaf) = entry.payload {
                let ctx = LeafContext {
                    opcode: entry.value,
                    address: 0,
                    bit_width: entry.bit_width,
                };
                let text = leaf.render(&ctx).unwrap();
                assert!(text.starts_with(leaf.mnemonic()), "{text}");
            }
        }
    }
}
