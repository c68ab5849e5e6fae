/// Exchanges the `size`-byte records at indices `a` and `b` of `bytes`.
///
/// 4- and 8-byte records go through a fixed-width temporary so they move as
/// single words; other sizes fall back to a slice swap.
#[inline]
pub(crate) fn swap_records(bytes: &mut [u8], a: usize, b: usize, size: usize) {
    if a == b {
        return;
    }

    let (first, second) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = bytes.split_at_mut(second * size);
    let x = &mut head[first * size..(first + 1) * size];
    let y = &mut tail[..size];

    match size {
        4 => swap_fixed::<4>(x, y),
        8 => swap_fixed::<8>(x, y),
        _ => x.swap_with_slice(y),
    }
}

#[inline(always)]
fn swap_fixed<const N: usize>(x: &mut [u8], y: &mut [u8]) {
    let mut tmp = [0_u8; N];
    tmp.copy_from_slice(x);
    x.copy_from_slice(y);
    y.copy_from_slice(&tmp);
}
