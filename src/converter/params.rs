//! SGR parameter list and cursor.
//!
//! A CSI body such as `1;38;5;196` is split on `;` into integers. Missing and
//! non-numeric parameters decode as 0; integers outside the `u32` range decode
//! as `u32::MAX`, which no code matches. The cursor walks the list left to right
//! and may consume several parameters for one logical code.

/// Decoded parameters of one CSI body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgrParams {
    values: Vec<u32>,
}

impl SgrParams {
    /// Split a CSI body on `;`. An empty body yields a single `0`.
    pub fn parse(body: &[u8]) -> Self {
        let values = body.split(|&b| b == b';').map(parse_param).collect();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    pub fn cursor(&self) -> ParamCursor<'_> {
        ParamCursor {
            values: &self.values,
            pos: 0,
        }
    }
}

fn parse_param(raw: &[u8]) -> u32 {
    let Some(value) = std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
    else {
        return 0;
    };
    // Integers outside u32 are kept as a code that selects nothing
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Read position over an [`SgrParams`] list.
#[derive(Debug, Clone)]
pub struct ParamCursor<'a> {
    values: &'a [u32],
    pos: usize,
}

impl<'a> ParamCursor<'a> {
    /// Take the next parameter, advancing by one.
    pub fn next_code(&mut self) -> Option<u32> {
        let code = self.peek()?;
        self.pos += 1;
        Some(code)
    }

    /// Look at the next parameter without consuming it.
    pub fn peek(&self) -> Option<u32> {
        self.values.get(self.pos).copied()
    }

    /// Consume exactly `n` parameters, or none if fewer than `n` remain.
    pub fn consume(&mut self, n: usize) -> Option<&'a [u32]> {
        let end = self.pos.checked_add(n)?;
        let taken = self.values.get(self.pos..end)?;
        self.pos = end;
        Some(taken)
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}
