use anyhow::Result;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::debug;

#[cfg(test)]
mod test;

/// Most results shown for a single request.
pub const MAX_PAGE: usize = 1_000;

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: impl Display) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn summary(found: usize, max_perms: u128, letters: &[char]) -> String {
    format!(
        "found {} of {} for ({})",
        group_thousands(found),
        group_thousands(max_perms),
        letters.iter().join(",")
    )
}

/// Longest first; equal lengths in alphabetical order.
pub fn sort_results(found: HashSet<String>) -> Vec<String> {
    found
        .into_iter()
        .sorted_by_cached_key(|word| (Reverse(word.chars().count()), word.clone()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Pager {
    results: Vec<String>,
    index: usize,
}

impl Pager {
    pub fn new(results: Vec<String>) -> Self {
        Self { results, index: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.results.len() - self.index
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Advance past up to `requested` results, capped at [`MAX_PAGE`].
    pub fn next_page(&mut self, requested: usize) -> &[String] {
        let count = requested.min(MAX_PAGE).min(self.remaining());
        let start = self.index;
        self.index += count;
        &self.results[start..self.index]
    }

    /// Keep asking how many results to show until the results run out, the
    /// user enters zero or less, or input ends. Unparseable answers are asked
    /// again.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        while !self.is_done() {
            write!(out, "How many solutions would you like to see? (0 to exit) ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("input closed while paging");
                break;
            }

            let requested: i64 = match line.trim().parse() {
                Ok(n) => n,
                Err(_) => continue,
            };
            if requested <= 0 {
                break;
            }

            let page = self.next_page(usize::try_from(requested).unwrap_or(usize::MAX));
            writeln!(out, "{{ {} }}", page.iter().join(" : "))?;
        }
        Ok(())
    }
}
