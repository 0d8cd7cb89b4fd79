// Copyright (c) 2016, 2017, 2018, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>

//! Textual rendering of square matrices.

use std::fmt;

/// The symbol printed for a missing entry.
pub const MISSING: &str = "-";

/// Write an `n x n` matrix as a tab separated table.
///
/// The table starts with the line `"{title} :"`, followed by a header
/// row of column indices. Each row starts with its row index. Missing
/// entries are printed as [`MISSING`].
pub fn write_matrix<W, F>(f: &mut fmt::Formatter, title: &str, n: usize, entry: F) -> fmt::Result
where
    W: fmt::Display,
    F: Fn(usize, usize) -> Option<W>,
{
    writeln!(f, "{} :", title)?;
    write!(f, "\t")?;
    for col in 0..n {
        write!(f, "{}\t", col)?;
    }
    writeln!(f)?;

    for row in 0..n {
        write!(f, "{}\t", row)?;
        for col in 0..n {
            match entry(row, col) {
                Some(w) => write!(f, "{}\t", w)?,
                None => write!(f, "{}\t", MISSING)?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}
