//! Fixed-size chunking of ordered sequences.
//!
//! `chunk_ranges` yields the split points `[0, k), [k, 2k), ...` for a
//! sequence of length `len`; every range but the last spans exactly `k`
//! items and the last holds the remainder. An empty sequence yields a single
//! empty range so callers always see at least one chunk.
//!
//! `chunkify` maps those ranges onto a slice. Image stacks reuse the same
//! ranges along their leading axis (see `ImageStack::chunks`).
//!
//! The iterators step an index forward and never recurse. They are `Clone`:
//! a clone resumes from the point it was taken, and a fresh call to
//! `chunkify` always starts from the first chunk.
use crate::error::{LayoutError, Result};
use std::iter::FusedIterator;
use std::ops::Range;

/// Iterator over the split points of a sequence of `len` items.
#[derive(Clone, Debug)]
pub struct ChunkRanges {
    len: usize,
    size: usize,
    start: usize,
    done: bool,
}

/// Split `0..len` into consecutive ranges of `chunk_size` items.
///
/// Fails with `InvalidArgument` when `chunk_size == 0`.
pub fn chunk_ranges(len: usize, chunk_size: usize) -> Result<ChunkRanges> {
    validate_chunk_size(chunk_size)?;
    Ok(ChunkRanges {
        len,
        size: chunk_size,
        start: 0,
        done: false,
    })
}

pub(crate) fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(LayoutError::invalid(
            "chunk_size",
            "chunk_size should be a positive integer",
        ));
    }
    Ok(())
}

/// Number of chunks `chunk_ranges(len, chunk_size)` produces.
///
/// `chunk_size` must be non-zero.
#[inline]
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.div_ceil(chunk_size).max(1)
}

impl Iterator for ChunkRanges {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.done {
            return None;
        }
        let end = self.start.saturating_add(self.size).min(self.len);
        let range = self.start..end;
        self.start = end;
        if end >= self.len {
            self.done = true;
        }
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            chunk_count(self.len - self.start, self.size)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkRanges {}
impl FusedIterator for ChunkRanges {}

/// Lazy chunks of a borrowed slice.
#[derive(Debug)]
pub struct Chunks<'a, T> {
    items: &'a [T],
    ranges: ChunkRanges,
}

impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            ranges: self.ranges.clone(),
        }
    }
}

/// Split `items` into consecutive chunks of `chunk_size` elements.
///
/// ```
/// use panel_layout::chunk::chunkify;
///
/// let chunks: Vec<&[i32]> = chunkify(&[1, 2, 3], 2).unwrap().collect();
/// assert_eq!(chunks, vec![&[1, 2][..], &[3][..]]);
/// ```
pub fn chunkify<T>(items: &[T], chunk_size: usize) -> Result<Chunks<'_, T>> {
    Ok(Chunks {
        items,
        ranges: chunk_ranges(items.len(), chunk_size)?,
    })
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        self.ranges.next().map(|r| &self.items[r])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.size_hint()
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}
impl<T> FusedIterator for Chunks<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(items: &[i32], k: usize) -> Vec<Vec<i32>> {
        chunkify(items, k)
            .expect("valid chunk size")
            .map(|c| c.to_vec())
            .collect()
    }

    #[test]
    fn splits_small_lists() {
        assert_eq!(collect(&[1, 2, 3], 1), vec![vec![1], vec![2], vec![3]]);
        assert_eq!(collect(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
        assert_eq!(collect(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
        assert_eq!(collect(&[1, 2, 3], 4), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn empty_input_yields_one_empty_chunk() {
        assert_eq!(collect(&[], 3), vec![Vec::<i32>::new()]);
        assert_eq!(chunk_count(0, 3), 1);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = chunkify(&[1, 2, 3], 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(chunk_ranges(0, 0).is_err());
    }

    #[test]
    fn lengths_and_order_hold_for_many_sizes() {
        let items: Vec<i32> = (0..37).collect();
        for k in 1..=40 {
            let chunks = collect(&items, k);
            assert_eq!(chunks.len(), chunk_count(items.len(), k));
            let (last, head) = chunks.split_last().expect("at least one chunk");
            assert!(head.iter().all(|c| c.len() == k), "k={k}");
            assert!(!last.is_empty() && last.len() <= k, "k={k}");
            let joined: Vec<i32> = chunks.concat();
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn reports_exact_length_while_iterating() {
        let items = [0u8; 10];
        let mut it = chunkify(&items, 4).unwrap();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.next();
        it.next();
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }

    #[test]
    fn clone_restarts_from_clone_point() {
        let items = [1, 2, 3, 4, 5];
        let mut it = chunkify(&items, 2).unwrap();
        it.next();
        let rest: Vec<&[i32]> = it.clone().collect();
        assert_eq!(rest, vec![&[3, 4][..], &[5][..]]);
        assert_eq!(it.count(), 2);
    }

    #[test]
    fn huge_chunk_size_does_not_overflow() {
        assert_eq!(collect(&[7, 8], usize::MAX), vec![vec![7, 8]]);
    }
}
