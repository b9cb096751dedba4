mod template;

#[cfg(test)]
mod tests;

use crate::config::{ResolvedConfig, Visibility};
use crate::encoder::{self, LINE_WIDTH};
use crate::error::EmbedError;
use crate::registry::{Bundle, DirectoryRecord, FileRecord};
use std::fmt::Write;

/// Render a bundle as Rust source.
///
/// Files come first, then directories, each in sorted virtual path order, so
/// identical input gives byte-identical output.
pub fn render(bundle: &Bundle, config: &ResolvedConfig) -> Result<String, EmbedError> {
    let mut out = header(&config.module, config.visibility, &config.invocation);

    for file in &bundle.files {
        write_file(&mut out, file)?;
    }
    for dir in &bundle.dirs {
        write_dir(&mut out, dir)?;
    }

    out.push_str(template::FOOTER);
    Ok(out)
}

fn header(module: &str, visibility: Visibility, invocation: &str) -> String {
    let invocation = invocation.replace(['\r', '\n'], " ");
    let invocation = if invocation.is_empty() {
        invocation
    } else {
        format!(" {}", invocation)
    };

    template::HEADER
        .replace("@INVOCATION@", &invocation)
        .replace("@VIS@", visibility.as_str())
        .replace("@MODULE@", module)
}

fn write_file(out: &mut String, file: &FileRecord) -> std::fmt::Result {
    writeln!(out, "        Entry::file(")?;
    writeln!(out, "            {:?},", file.virtual_path)?;
    writeln!(out, "            {:?},", file.local_path)?;
    writeln!(out, "            {},", file.size)?;
    writeln!(out, "            {},", file.mod_time)?;
    writeln!(out, "            concat!(")?;
    for line in encoder::wrap(&file.payload, LINE_WIDTH) {
        writeln!(out, "                \"{}\",", line)?;
    }
    writeln!(out, "            ),")?;
    writeln!(out, "        ),")
}

fn write_dir(out: &mut String, dir: &DirectoryRecord) -> std::fmt::Result {
    writeln!(
        out,
        "        Entry::dir({:?}, {:?}),",
        dir.virtual_path, dir.local_path
    )
}
