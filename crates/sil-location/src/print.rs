//! Human-readable rendering of location tags

use crate::kind::{LocationFlags, LocationKind};
use crate::location::SilLocation;
use sil_source_map::SourceContext;
use std::fmt;

impl<'a> SilLocation<'a> {
    /// Writes a one-line description: kind, flags, and the payload resolved
    /// through `ctx`.
    ///
    /// ```text
    /// cleanup [auto-generated] stmt @ main.swift:3:5 [main.swift:3:5 - main.swift:5:2]
    /// regular [top-level] <null>
    /// inlined sil-file @ test.sil:12:3
    /// sil-file @ test.sil:4:1
    /// ```
    pub fn print(&self, out: &mut impl fmt::Write, ctx: &SourceContext) -> fmt::Result {
        write!(out, "{}", self.kind())?;

        let flags = self.flags();
        if !flags.is_empty() {
            let names: Vec<&str> = LocationFlags::NAMES
                .iter()
                .filter(|(flag, _)| flags.contains(*flag))
                .map(|(_, name)| *name)
                .collect();
            write!(out, " [{}]", names.join(", "))?;
        }

        if let Some(node) = self.ast_node() {
            // Resolved positions, so the points-to flags show up in the output
            if let Some(loc) = self.source_loc() {
                write!(out, " {} @ {}", node.family_name(), ctx.display_loc(loc))?;
            }
            if let Some(range) = self.source_range()
                && !range.is_point()
            {
                write!(
                    out,
                    " [{} - {}]",
                    ctx.display_loc(range.start),
                    ctx.display_loc(range.end)
                )?;
            }
            Ok(())
        } else if let Some(loc) = self.file_source_loc() {
            // The kind already names the payload
            if self.kind() != LocationKind::SilFile {
                out.write_str(" sil-file")?;
            }
            write!(out, " @ {}", ctx.display_loc(loc))
        } else {
            out.write_str(" <null>")
        }
    }

    /// Prints to stderr, for use from a debugger.
    pub fn dump(&self, ctx: &SourceContext) {
        eprintln!("{}", self.display(ctx));
    }

    pub fn display<'b>(&'b self, ctx: &'b SourceContext) -> LocationDisplay<'b, 'a> {
        LocationDisplay { loc: self, ctx }
    }
}

/// [`fmt::Display`] adapter returned by [`SilLocation::display`]
pub struct LocationDisplay<'b, 'a> {
    loc: &'b SilLocation<'a>,
    ctx: &'b SourceContext,
}

impl fmt::Display for LocationDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.loc.print(f, self.ctx)
    }
}
