//! Day 9: Disk Fragmenter.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{Part, PuzzleError, Result, Settings};

#[derive(Clone, Copy, Debug)]
struct File {id: usize, pos: usize, len: usize}

/// Returns the files and the gaps (`pos`, `len`) of the dense disk map.
fn parse(input: &str) -> Result<(Vec<File>, Vec<(usize, usize)>)> {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut pos = 0;
    for (i, c) in input.trim().bytes().enumerate() {
        if !c.is_ascii_digit() {
            return Err(PuzzleError::malformed(format!("unexpected {:?} in disk map", c as char)));
        }
        let len = (c - b'0') as usize;
        if i % 2 == 0 {files.push(File {id: i / 2, pos, len})} else if len > 0 {gaps.push((pos, len))}
        pos += len;
    }
    Ok((files, gaps))
}

fn checksum(files: &[File]) -> usize {
    files.iter().map(|f| f.id * (f.pos .. f.pos + f.len).sum::<usize>()).sum()
}

/// Moves single blocks from the end into the leftmost free block.
fn compact_blocks(files: &[File]) -> usize {
    let mut blocks = vec![];
    for file in files {
        if blocks.len() < file.pos {blocks.resize(file.pos, None)}
        blocks.extend(std::iter::repeat(Some(file.id)).take(file.len));
    }
    let (mut left, mut right) = (0, blocks.len());
    loop {
        while left < right && blocks[left].is_some() {left += 1}
        while right > left && blocks[right - 1].is_none() {right -= 1}
        if left + 1 >= right {break}
        blocks.swap(left, right - 1);
    }
    blocks.iter().enumerate().filter_map(|(pos, id)| id.map(|id| pos * id)).sum()
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
fn compact_files(mut files: Vec<File>, gaps: &[(usize, usize)]) -> usize {
    // One min-heap of gap positions per gap length.
    let mut by_len: [BinaryHeap<Reverse<usize>>; 10] = Default::default();
    for &(pos, len) in gaps {by_len[len].push(Reverse(pos))}

    for file in files.iter_mut().rev() {
        let best = (file.len ..= 9)
            .filter_map(|len| by_len[len].peek().map(|&Reverse(pos)| (pos, len)))
            .filter(|&(pos, _)| pos < file.pos)
            .min();
        if let Some((pos, len)) = best {
            by_len[len].pop();
            if len > file.len {by_len[len - file.len].push(Reverse(pos + file.len))}
            file.pos = pos;
        }
    }
    checksum(&files)
}

pub fn solve(part: Part, input: &str, _: &Settings) -> Result<String> {
    let (files, gaps) = parse(input)?;
    Ok(match part {
        Part::One => compact_blocks(&files),
        Part::Two => compact_files(files, &gaps),
    }.to_string())
}
