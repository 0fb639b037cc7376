use crate::{CounterRecord, StatsTree};
use chrono::SecondsFormat;
use std::fmt::Write;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const INDENT: &str = "  ";

impl StatsTree {
    /// Serialize the tree into the `redirect_stats` document consumed by
    /// the build service API.
    ///
    /// Output is deterministic: groups appear in ascending lexical order
    /// at every level, leaf records in input order. Timestamps render as
    /// RFC 3339 / xmlschema with a `Z` suffix. Serialization cannot fail
    /// for records that passed boundary validation.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str(DECLARATION);
        out.push('\n');

        if self.is_empty() {
            out.push_str("<redirect_stats/>\n");
            return out;
        }

        out.push_str("<redirect_stats>\n");
        for (project, packages) in &self.projects {
            open_named(&mut out, 1, "project", project);
            for (package, repositories) in packages {
                open_named(&mut out, 2, "package", package);
                for (repository, arches) in repositories {
                    open_named(&mut out, 3, "repository", repository);
                    for (arch, records) in arches {
                        open_named(&mut out, 4, "arch", arch);
                        for record in records {
                            write_count(&mut out, 5, record);
                        }
                        close(&mut out, 4, "arch");
                    }
                    close(&mut out, 3, "repository");
                }
                close(&mut out, 2, "package");
            }
            close(&mut out, 1, "project");
        }
        out.push_str("</redirect_stats>\n");
        out
    }
}

fn open_named(out: &mut String, depth: usize, tag: &str, name: &str) {
    indent(out, depth);
    let _ = writeln!(out, "<{} name=\"{}\">", tag, escape(name));
}

fn close(out: &mut String, depth: usize, tag: &str) {
    indent(out, depth);
    let _ = writeln!(out, "</{}>", tag);
}

fn write_count(out: &mut String, depth: usize, record: &CounterRecord) {
    indent(out, depth);
    let _ = writeln!(
        out,
        "<count filename=\"{}\" filetype=\"{}\" version=\"{}\" release=\"{}\" \
         created_at=\"{}\" counted_at=\"{}\">{}</count>",
        escape(&record.filename),
        escape(&record.filetype),
        escape(&record.version),
        escape(&record.release),
        xmlschema(&record.created_at),
        xmlschema(&record.counted_at),
        record.count,
    );
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn xmlschema(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Escape the XML-reserved characters for element text and double-quoted
/// attribute values.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
