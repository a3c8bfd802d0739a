/// Default number of synthetic addresses.
pub const DEFAULT_COUNT: usize = 64;
/// Default stride between synthetic addresses.
pub const DEFAULT_PAGE_SIZE: u64 = 4 * 1024;

/// `count` addresses `i * page_size`, each written as `0x` plus five
/// upper-case hex digits (wider values keep all their digits).
pub fn sequential_addresses(count: usize, page_size: u64) -> Vec<String> {
    (0..count as u64)
        .map(|i| format!("0x{:05X}", i * page_size))
        .collect()
}
