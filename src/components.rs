pub trait Component {
    /// Render the component to a HTML string.
    fn render(&self) -> String;
}

pub struct Page<'a> {
    pub title: &'a str,
    pub children: Box<dyn Component + 'a>,
}

impl Component for Page<'_> {
    fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html>
                <head>
                    <meta charset="utf-8">
                    <meta name="viewport" content="width=device-width, initial-scale=1.0">
                    <title>{title}</title>
                    <link
                        rel="stylesheet"
                        href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css"
                    >
                </head>
                <body>
                    {body_html}
                    <script src="/static/script.js"></script>
                </body>
            </html>
            "#,
            title = self.title,
            body_html = self.children.render()
        )
    }
}

/// The form and the (initially empty) table. Rows are filled in by the
/// client script from `/get-notes`.
#[derive(Default)]
pub struct NoteBoard {}
impl Component for NoteBoard {
    fn render(&self) -> String {
        r##"
        <main class="container my-4">
            <h1 class="mb-4">Notes</h1>
            <form id="noteForm" class="mb-4">
                <div class="mb-3">
                    <label for="name" class="form-label">Name</label>
                    <input class="form-control" type="text" name="name" id="name" required />
                </div>
                <div class="mb-3">
                    <label for="note" class="form-label">Note</label>
                    <textarea class="form-control" name="note" id="note" required></textarea>
                </div>
                <button type="submit" class="btn btn-primary">Add Note</button>
            </form>
            <table id="notesTable" class="table">
                <thead>
                    <tr>
                        <th>Name</th>
                        <th>Note</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody></tbody>
            </table>
        </main>
        "##
        .to_string()
    }
}
