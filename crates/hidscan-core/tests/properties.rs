use hidscan_core::{is_plausible, scan_buffer, ScanOptions, TAG_SET};
use proptest::prelude::*;

/// 逐字节推进的直译版本，用来对照 memchr 跳转的实现
fn reference_scan(buf: &[u8], min_len: usize, max_len: usize, min_density: f64) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset + min_len <= buf.len() {
        if buf[offset] != 0x05 {
            offset += 1;
            continue;
        }
        let mut depth = 0isize;
        let mut found = None;
        for end in offset..(offset + max_len).min(buf.len()) {
            match buf[end] {
                0xA1 => depth += 1,
                0xC0 => {
                    depth -= 1;
                    if depth <= 0 && end - offset + 1 >= min_len && is_plausible(&buf[offset..=end], min_density) {
                        found = Some(end);
                        break;
                    }
                }
                _ => {}
            }
        }
        match found {
            Some(end) => {
                out.push((offset, end));
                offset = end + 1;
            }
            None => offset += 1,
        }
    }
    out
}

/// 偏向标签字节的输入，否则随机数据几乎不产生候选
fn descriptor_ish_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => any::<u8>(),
            1 => Just(0x05u8),
            1 => Just(0xA1u8),
            2 => Just(0xC0u8),
            1 => Just(0x09u8),
            1 => Just(0x00u8),
        ],
        0..max,
    )
}

fn options() -> impl Strategy<Value = ScanOptions> {
    (1usize..48, 0usize..128, 0u32..=10).prop_map(|(min_len, extra, tenths)| ScanOptions {
        min_len,
        max_len: min_len + extra,
        min_density: f64::from(tenths) / 10.0,
        ..ScanOptions::default()
    })
}

proptest! {
    #[test]
    fn candidates_satisfy_the_invariants(buf in descriptor_ish_bytes(600), opts in options()) {
        let found = scan_buffer(&buf, &opts).unwrap();
        let mut next_free = 0usize;
        for c in &found {
            prop_assert!(c.len() >= opts.min_len);
            prop_assert!(c.len() <= opts.max_len);
            prop_assert_eq!(c.bytes[0], 0x05);
            prop_assert_eq!(*c.bytes.last().unwrap(), 0xC0);
            prop_assert_eq!(c.bytes, &buf[c.offset..=c.end()]);
            prop_assert_eq!(c.score.tag_bytes, TAG_SET.count_in(c.bytes));
            prop_assert!(c.score.tag_bytes as f64 >= c.len() as f64 * opts.min_density);
            // 升序且互不重叠
            prop_assert!(c.offset >= next_free);
            next_free = c.end() + 1;
        }
    }

    #[test]
    fn matches_the_byte_by_byte_walk(buf in descriptor_ish_bytes(600), opts in options()) {
        let found: Vec<(usize, usize)> = scan_buffer(&buf, &opts)
            .unwrap()
            .iter()
            .map(|c| (c.offset, c.end()))
            .collect();
        prop_assert_eq!(found, reference_scan(&buf, opts.min_len, opts.max_len, opts.min_density));
    }

    #[test]
    fn scanning_is_idempotent(buf in descriptor_ish_bytes(400), opts in options()) {
        let first = scan_buffer(&buf, &opts).unwrap();
        let second = scan_buffer(&buf, &opts).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_buffers_yield_nothing(buf in descriptor_ish_bytes(32)) {
        let opts = ScanOptions { min_len: 32, ..ScanOptions::default() };
        prop_assert!(scan_buffer(&buf, &opts).unwrap().is_empty());
    }
}
