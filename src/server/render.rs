// src/server/render.rs

//! Inline HTML rendering for the contacts page. Names and phones are
//! free-form text and must be escaped on output.

use crate::contacts::Contact;

use super::StatusMessage;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

pub fn render_page(contacts: &[Contact], status: Option<&StatusMessage>) -> String {
    let status_html = match status {
        Some(msg) => format!(
            r#"<p class="{}">{}</p>"#,
            msg.kind.css_class(),
            escape_html(&msg.text)
        ),
        None => String::new(),
    };

    let contacts_html = if contacts.is_empty() {
        "<p>No contacts found.</p>".to_string()
    } else {
        let mut rows = String::new();
        for contact in contacts {
            rows.push_str(&format!(
                r#"        <tr>
            <td>{name}</td>
            <td>{phone}</td>
            <td>
                <form method="POST" action="/">
                    <input type="hidden" name="contact_id" value="{id}">
                    <input type="hidden" name="action" value="delete">
                    <input type="submit" value="Delete">
                </form>
            </td>
        </tr>
"#,
                name = escape_html(&contact.name),
                phone = escape_html(&contact.phone),
                id = contact.id,
            ));
        }
        format!(
            r#"<table border="1">
        <tr>
            <th>Name</th>
            <th>Phone Number</th>
            <th>Delete</th>
        </tr>
{rows}    </table>"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Contacts</title>
    <style>
        .status-success {{ color: #155724; }}
        .status-validation {{ color: #856404; }}
        .status-storage {{ color: #721c24; }}
        .clear-all-form input {{ background-color: #dc3545; }}
    </style>
    <script>
        function confirmClearAll() {{
            return confirm("Are you sure you want to delete ALL contacts? This action cannot be undone.");
        }}
    </script>
</head>
<body>
    <h2>Add Contacts</h2>
    <form method="POST" action="/">
        <label for="name">Name:</label><br>
        <input type="text" id="name" name="name" required><br>
        <label for="phone">Phone Number:</label><br>
        <input type="text" id="phone" name="phone" required><br><br>
        <input type="submit" value="Submit">
    </form>
    <div class="action-buttons">
        <h2>Quick Actions</h2>
        <form method="POST" action="/">
            <input type="hidden" name="action" value="add_random">
            <input type="submit" value="Add Random Test Contact">
        </form>
        <form method="POST" action="/" class="clear-all-form" onsubmit="return confirmClearAll();">
            <input type="hidden" name="action" value="clear_all">
            <input type="submit" value="Clear All Contacts">
        </form>
    </div>
    {status_html}
    {contacts_html}
</body>
</html>
"#
    )
}
