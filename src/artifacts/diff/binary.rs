/// Number of leading bytes inspected when sniffing for binary content
pub const SNIFF_LENGTH: usize = 8 * 1024;

/// Heuristic binary check: a NUL byte within the first 8 KiB
///
/// Text files with embedded NULs are reported as binary too, which only costs
/// them a line-level diff.
pub fn is_binary(data: &[u8]) -> bool {
    let sniffed = &data[..data.len().min(SNIFF_LENGTH)];
    sniffed.contains(&0)
}
