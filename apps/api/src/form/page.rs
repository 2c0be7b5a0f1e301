//! The form page: one rendering function over the field descriptor table.
//!
//! The page is self-contained HTML: a widget per descriptor, the derived
//! field wiring, and a submit script that posts the record as JSON and saves
//! the returned PDF under the fixed filename. On any failure the script
//! surfaces a single notice and leaves the form state untouched.

use axum::response::Html;

use crate::form::descriptors::{field_descriptors, FieldDescriptor, FieldKind};

/// GET /
pub async fn form_page() -> Html<String> {
    Html(render_form_page(&field_descriptors()))
}

/// Renders the full form page from the descriptor table.
pub fn render_form_page(fields: &[FieldDescriptor]) -> String {
    let mut widgets = String::new();
    for field in fields {
        widgets.push_str("      <div class=\"form-group\">\n");
        widgets.push_str(&format!(
            "        <label for=\"{0}\">{1}</label>\n",
            field.name, field.label
        ));
        widgets.push_str(&render_widget(field));
        widgets.push_str("      </div>\n");
    }

    // Wire every derived field to its source, straight from the table.
    let mut derived_wiring = String::new();
    for field in fields {
        if let FieldKind::Derived { source } = &field.kind {
            derived_wiring.push_str(&format!("  mirror('{}', '{}');\n", source, field.name));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Hostel Leave Letter</title>
  <style>
    body {{ font-family: Georgia, serif; background: #f4f4f4; margin: 0; }}
    .form-container {{ max-width: 480px; margin: 2rem auto; background: #fff;
                       padding: 1.5rem 2rem; border-radius: 8px;
                       box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); }}
    h1 {{ font-size: 1.3rem; }}
    .form-group {{ margin-bottom: 1rem; }}
    label {{ display: block; margin-bottom: 0.3rem; font-weight: bold; }}
    input, select {{ width: 100%; padding: 0.5rem; box-sizing: border-box; }}
    input[readonly] {{ background: #eee; }}
    button {{ width: 100%; padding: 0.6rem; font-size: 1rem; cursor: pointer; }}
  </style>
</head>
<body>
  <div class="form-container">
    <h1>Hostel Leave Letter</h1>
    <form id="leave-form">
{widgets}      <button type="submit">Get Leave Letter</button>
    </form>
  </div>
  <script>
  const form = document.getElementById('leave-form');

  function mirror(source, target) {{
    form.elements[source].addEventListener('input', (e) => {{
      form.elements[target].value = e.target.value;
    }});
  }}
{derived_wiring}
  form.addEventListener('submit', async (e) => {{
    e.preventDefault();
    const record = Object.fromEntries(new FormData(form));
    try {{
      const response = await fetch('/api/v1/leave-letter', {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        body: JSON.stringify(record),
      }});
      if (!response.ok) throw new Error('generation failed');
      const url = URL.createObjectURL(await response.blob());
      const link = document.createElement('a');
      link.href = url;
      link.download = 'Hostel_Leave_Letter.pdf';
      document.body.appendChild(link);
      link.click();
      link.remove();
      URL.revokeObjectURL(url);
    }} catch (err) {{
      alert('Failed to generate PDF');
    }}
  }});
  </script>
</body>
</html>
"#
    )
}

fn render_widget(field: &FieldDescriptor) -> String {
    match &field.kind {
        FieldKind::Text => format!(
            "        <input type=\"text\" id=\"{0}\" name=\"{0}\" placeholder=\"{1}\" required>\n",
            field.name, field.placeholder
        ),
        FieldKind::Date => format!(
            "        <input type=\"date\" id=\"{0}\" name=\"{0}\" required>\n",
            field.name
        ),
        FieldKind::Enum { options } => {
            let mut select = format!(
                "        <select id=\"{0}\" name=\"{0}\" required>\n\
                 \x20         <option value=\"\" selected disabled>{1}</option>\n",
                field.name, field.placeholder
            );
            for option in options {
                select.push_str(&format!(
                    "          <option value=\"{0}\">{0}</option>\n",
                    option
                ));
            }
            select.push_str("        </select>\n");
            select
        }
        FieldKind::Derived { .. } => format!(
            "        <input type=\"text\" id=\"{0}\" name=\"{0}\" placeholder=\"{1}\" required readonly>\n",
            field.name, field.placeholder
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
