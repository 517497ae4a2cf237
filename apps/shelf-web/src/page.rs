//! # Page Shell
//!
//! The single HTML page: status line, books table, update form, remove form.
//!
//! The table body comes from [`shelf_core::TableView::to_html`]; this module
//! only lays the pieces out. Form values echoed back after a failed
//! submission are escaped like every other piece of user text.

use shelf_core::view::escape_html;
use shelf_core::{BookRemoval, BookUpdate, StatusMessage, TableView};

/// Values to pre-fill into the two forms.
#[derive(Debug, Clone, Default)]
pub struct FormDrafts {
    pub update: BookUpdate,
    pub removal: BookRemoval,
}

/// Renders the whole page.
pub fn render_page(table: &TableView, status: Option<&StatusMessage>, drafts: &FormDrafts) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Book List</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
table {{ width: 100%; border-collapse: collapse; }}
th, td {{ text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #ddd; }}
td.empty {{ text-align: center; color: #888; }}
.status {{ padding: 0.6rem; margin-bottom: 1rem; }}
.status.success {{ background: #e6f4ea; }}
.status.error {{ background: #fce8e6; }}
form {{ margin-top: 1.5rem; }}
</style>
</head>
<body>
<h1>Book List</h1>
{status}
<table>
<thead><tr><th>Title</th><th>Author</th><th>Year</th><th>Genre</th></tr></thead>
<tbody id="booksTableBody">
{rows}</tbody>
</table>
<form id="updateForm" method="post" action="/books/update">
<h2>Update Book</h2>
<input name="title" placeholder="Title" value="{update_title}">
<input name="author" placeholder="Author" value="{update_author}">
<input name="year" placeholder="Year" value="{update_year}">
<input name="genre" placeholder="Genre" value="{update_genre}">
<button type="submit">Update</button>
</form>
<form id="removeForm" method="post" action="/books/remove">
<h2>Remove Book</h2>
<input name="title" placeholder="Title" value="{remove_title}">
<button type="submit">Remove</button>
</form>
</body>
</html>
"#,
        status = render_status(status),
        rows = table.to_html(),
        update_title = escape_html(&drafts.update.title),
        update_author = escape_html(&drafts.update.author),
        update_year = escape_html(&drafts.update.year),
        update_genre = escape_html(&drafts.update.genre),
        remove_title = escape_html(&drafts.removal.title),
    )
}

fn render_status(status: Option<&StatusMessage>) -> String {
    match status {
        Some(message) => {
            let class = if message.is_error() { "error" } else { "success" };
            format!(
                r#"<div id="feedback" class="status {class}">{}</div>"#,
                escape_html(&message.text)
            )
        }
        None => r#"<div id="feedback"></div>"#.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelf_core::{render, BookRegistry, StatusLine};

    #[test]
    fn test_page_contains_rows_and_empty_forms() {
        let page = render_page(&render(&BookRegistry::seeded()), None, &FormDrafts::default());

        assert!(page.contains("<td>The Great Gatsby</td>"));
        assert!(page.contains(r#"<input name="author" placeholder="Author" value="">"#));
        assert!(page.contains(r#"<div id="feedback"></div>"#));
    }

    #[test]
    fn test_status_and_drafts_are_escaped() {
        let mut line = StatusLine::new();
        line.success("Book \"<b>\" updated successfully", Utc::now());

        let drafts = FormDrafts {
            update: BookUpdate::new("\"><script>", "", "", ""),
            removal: BookRemoval::default(),
        };
        let page = render_page(&render(&BookRegistry::default()), line.current(), &drafts);

        assert!(page.contains("class=\"status success\""));
        assert!(page.contains("Book &quot;&lt;b&gt;&quot; updated successfully"));
        assert!(page.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(page.contains("No books in the list"));
    }
}
