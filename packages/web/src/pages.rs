//! Minimal server-rendered pages for the workflow.

use crate::session::Workflow;

/// Wrap a page body in the shared layout.
fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = flash
        .map(|msg| format!(r#"<p class="flash">{}</p>"#, escape(msg)))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - WXR Split</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
.flash {{ background: #fff3cd; border: 1px solid #ffe69c; padding: .5rem 1rem; }}
table {{ border-collapse: collapse; }}
td, th {{ border: 1px solid #ccc; padding: .25rem .75rem; text-align: left; }}
</style>
</head>
<body>
<h1>WXR Split</h1>
{flash_html}
{body}
</body>
</html>
"#
    )
}

/// Step 1: upload form.
pub fn index(flash: Option<&str>) -> String {
    layout(
        "Upload",
        flash,
        r#"<h2>Step 1: Upload your WordPress export</h2>
<p>Select the XML export file (up to 500 MB) to split into smaller chunks for Ghost import.</p>
<form method="post" action="/upload" enctype="multipart/form-data">
<input type="file" name="file" accept=".xml" required>
<button type="submit">Upload and analyze</button>
</form>"#,
    )
}

/// Step 2: analysis summary and split options.
pub fn analyze(
    workflow: &Workflow,
    flash: Option<&str>,
    default_size: usize,
    min_size: usize,
    max_size: usize,
) -> String {
    let counts = &workflow.counts;
    let body = format!(
        r#"<h2>Step 2: Analysis of {name}</h2>
<table>
<tr><th>Total items</th><td>{total}</td></tr>
<tr><th>Posts</th><td>{posts}</td></tr>
<tr><th>Pages</th><td>{pages}</td></tr>
<tr><th>Attachments</th><td>{attachments}</td></tr>
<tr><th>Other items</th><td>{other}</td></tr>
</table>
<h3>Splitting options</h3>
<form method="post" action="/split">
<p><label>Items per chunk
<input type="number" name="chunk_size" value="{default_size}" min="{min_size}" max="{max_size}">
</label></p>
<p>Post types to include (leave all unchecked to include everything):</p>
<p>
<label><input type="checkbox" name="post"> Posts</label>
<label><input type="checkbox" name="page"> Pages</label>
<label><input type="checkbox" name="attachment"> Attachments</label>
</p>
<button type="submit">Split</button>
</form>
<form method="post" action="/reset"><button type="submit">Start over</button></form>"#,
        name = escape(&workflow.original_filename),
        total = counts.total,
        posts = counts.posts,
        pages = counts.pages,
        attachments = counts.attachments,
        other = counts.other,
    );
    layout("Analyze", flash, &body)
}

/// Step 4: download page.
pub fn download(workflow: &Workflow) -> String {
    let body = format!(
        r#"<h2>Step 4: Download</h2>
<p>{name} was split into {chunks} chunk file(s) of up to {size} items each.</p>
<p><a href="/download/archive">Download zip archive</a></p>
<form method="post" action="/reset"><button type="submit">Split another file</button></form>"#,
        name = escape(&workflow.original_filename),
        chunks = workflow.chunk_count.unwrap_or(0),
        size = workflow.chunk_size.unwrap_or(0),
    );
    layout("Download", None, &body)
}

/// Escape text for interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
