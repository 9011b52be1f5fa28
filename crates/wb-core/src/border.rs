/// How neighborhood reads outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderMode<T> {
    /// Every outside read yields the fill value.
    Constant(T),
    /// Outside reads repeat the nearest edge element.
    Clamp,
    /// Mirror around the edge element without repeating it (`gfedcb|abcdefgh|gfedcba`).
    Reflect101,
}

/// Maps a possibly out-of-range index onto `[0, len)`.
///
/// Returns `None` when the index has no in-image counterpart: any
/// out-of-range index under [`BorderMode::Constant`], or `len == 0`.
pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => Some(if i < 0 { 0 } else { len - 1 }),
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }
            let period = 2 * len as isize - 2;
            let r = i.rem_euclid(period) as usize;
            Some(if r < len { r } else { 2 * len - 2 - r })
        }
    }
}
