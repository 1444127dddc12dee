// Server-rendered HTML pages.
//
// The site is three pages (listings, job detail, posting form) so the
// rendering layer is a handful of format! helpers rather than a template
// engine. Everything user-controlled goes through `escape` before it is
// interpolated into markup.

use crate::jobs::Job;

/// Minimal HTML entity escaping for text interpolated into pages.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Common page shell: header, category sidebar, body.
fn layout(title: &str, categories: &[String], body: &str) -> String {
    let nav: String = categories
        .iter()
        .map(|c| {
            format!(
                "<li><a href=\"/category/{0}\">{0}</a></li>",
                escape(c)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} — Corkboard</title></head>\n\
         <body>\n<h1><a href=\"/\">Corkboard Job Listings</a></h1>\n\
         <p><a href=\"/post_job\">Post a New Job</a></p>\n\
         <nav><ul>{nav}</ul></nav>\n\
         <main>{body}</main>\n</body>\n</html>",
        title = escape(title),
    )
}

/// The listings page, optionally scoped to one category.
pub fn index(jobs: &[Job], categories: &[String], category: Option<&str>) -> String {
    let heading = match category {
        Some(c) => format!("<h2>{} Jobs</h2>", escape(c)),
        None => "<h2>All Jobs</h2>".to_string(),
    };

    let rows: String = jobs
        .iter()
        .map(|job| {
            format!(
                "<li><a href=\"/job/{}\">{}</a> — {} <em>({})</em></li>",
                job.webindex,
                escape(&job.title),
                escape(&job.company),
                escape(&job.category),
            )
        })
        .collect();

    let list = if jobs.is_empty() {
        "<p>No jobs found.</p>".to_string()
    } else {
        format!("<ul>{rows}</ul>")
    };

    let title = category.unwrap_or("Job Listings");
    layout(title, categories, &format!("{heading}{list}"))
}

/// A single job's detail page.
pub fn job_detail(job: &Job, categories: &[String]) -> String {
    let description = job
        .description
        .as_deref()
        .unwrap_or(&job.processed_description);

    let body = format!(
        "<h2>{title}</h2>\n\
         <p><strong>Company:</strong> {company}</p>\n\
         <p><strong>Category:</strong> <a href=\"/category/{category}\">{category}</a></p>\n\
         <h3>Description</h3>\n<p>{description}</p>",
        title = escape(&job.title),
        company = escape(&job.company),
        category = escape(&job.category),
        description = escape(description),
    );
    layout(&job.title, categories, &body)
}

/// The posting form. `error` renders a flash-style message above the form;
/// the category dropdown defaults to "suggest one for me".
pub fn post_form(categories: &[String], error: Option<&str>) -> String {
    let flash = match error {
        Some(msg) => format!("<p class=\"error\">Error: {}</p>", escape(msg)),
        None => String::new(),
    };

    let options: String = categories
        .iter()
        .map(|c| format!("<option value=\"{0}\">{0}</option>", escape(c)))
        .collect();

    let body = format!(
        "<h2>Post a New Job</h2>\n{flash}\
         <form method=\"post\" action=\"/post_job\">\n\
         <p><label>Title <input name=\"title\" required></label></p>\n\
         <p><label>Company <input name=\"company\" required></label></p>\n\
         <p><label>Description <textarea name=\"description\" required></textarea></label></p>\n\
         <p><label>Category <select name=\"category\">\n\
         <option value=\"\">Suggest one for me</option>{options}</select></label></p>\n\
         <p><button type=\"submit\">Post Job</button></p>\n\
         </form>"
    );
    layout("Post a New Job", categories, &body)
}
