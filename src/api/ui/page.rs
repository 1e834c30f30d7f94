//! Server-rendered diagnosis page

use crate::domain::diagnosis::{FIELDS, FieldGroup, FieldSpec};
use crate::domain::{DisplayText, InferenceResult, MedicalInputRecord};

pub const TITLE: &str = "Medical Diagnosis on Diabetes";

pub const ERROR_MESSAGE: &str =
    "An error occurred while making the prediction. Please check your inputs and try again.";

const DISCLAIMER: &str = "This application is for educational purposes only and not a replacement for professional medical diagnosis.";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:860px;margin:2rem auto;padding:0 1rem;color:#222}\
.columns{display:flex;gap:1rem}\
fieldset{flex:1;border:1px solid #ccc;border-radius:6px}\
label{display:block;margin:.5rem 0 .2rem}\
input{width:100%;box-sizing:border-box;padding:.3rem}\
button{margin-top:1rem;padding:.5rem 1.5rem;font-size:1rem}\
table{border-collapse:collapse;margin:.5rem 0}\
td,th{border:1px solid #ddd;padding:.25rem .6rem;text-align:left}\
.verdict{padding:.75rem;border-radius:6px;font-weight:bold}\
.severity-success{background:#e3f6e5}\
.severity-warning{background:#fff4d6}\
.severity-danger{background:#fbe0e0}\
.severity-unknown{background:#eee}\
.error{background:#fbe0e0;padding:.75rem;border-radius:6px}\
.disclaimer{margin-top:2rem;font-size:.85rem;color:#666}";

/// What to show below the form
#[derive(Debug, Clone)]
pub enum Outcome {
    Diagnosed {
        result: InferenceResult,
        text: DisplayText,
    },
    Failed {
        detail: String,
    },
}

/// Everything the page needs for one render
#[derive(Debug, Clone)]
pub struct PageView {
    /// Values the form controls are filled with
    pub record: MedicalInputRecord,
    pub outcome: Option<Outcome>,
}

impl PageView {
    pub fn blank() -> Self {
        Self {
            record: MedicalInputRecord::default(),
            outcome: None,
        }
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Diabetes Diagnosis</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", TITLE));
    html.push_str("<p>Enter your medical details below to check for signs of diabetes risk.</p>\n");

    render_form(&mut html, &view.record);

    match &view.outcome {
        Some(Outcome::Diagnosed { result, text }) => {
            render_inputs(&mut html, &view.record);
            render_scaled(&mut html, result);
            render_verdict(&mut html, text);
        }
        Some(Outcome::Failed { detail }) => render_error(&mut html, detail),
        None => {}
    }

    html.push_str(&format!(
        "<footer class=\"disclaimer\">{}</footer>\n",
        DISCLAIMER
    ));
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn render_form(html: &mut String, record: &MedicalInputRecord) {
    html.push_str("<form method=\"post\" action=\"/\">\n<h2>Input Medical Values</h2>\n");
    html.push_str("<div class=\"columns\">\n");

    for group in [FieldGroup::Left, FieldGroup::Right] {
        html.push_str(&format!(
            "<fieldset class=\"group-{}\">\n",
            group_name(group)
        ));

        for (field, value) in record.fields().filter(|(f, _)| f.group == group) {
            render_input(html, field, value);
        }

        html.push_str("</fieldset>\n");
    }

    html.push_str("</div>\n<button type=\"submit\">Diagnose</button>\n</form>\n");
}

fn render_input(html: &mut String, field: &FieldSpec, value: f64) {
    html.push_str(&format!(
        "<label for=\"{key}\">{label}</label>\n\
         <input type=\"number\" id=\"{key}\" name=\"{key}\" min=\"{min}\" max=\"{max}\" \
         step=\"{step}\" value=\"{value}\" required>\n",
        key = field.key,
        label = escape_html(field.label),
        min = field.format_value(field.min),
        max = field.format_value(field.max),
        step = field.step,
        value = field.format_value(value),
    ));
}

fn render_inputs(html: &mut String, record: &MedicalInputRecord) {
    html.push_str("<section id=\"inputs\">\n<h3>Input Data</h3>\n<table>\n");
    html.push_str("<tr><th>Column</th><th>Value</th></tr>\n");

    for (field, value) in record.fields() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            field.column,
            field.format_value(value)
        ));
    }

    html.push_str("</table>\n</section>\n");
}

fn render_scaled(html: &mut String, result: &InferenceResult) {
    html.push_str("<section id=\"scaled\">\n<h3>Scaled Input Data</h3>\n<table>\n");
    html.push_str("<tr><th>Column</th><th>Value</th></tr>\n");

    for (field, value) in FIELDS.iter().zip(result.scaled) {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{:.4}</td></tr>\n",
            field.column, value
        ));
    }

    html.push_str("</table>\n</section>\n");
}

fn render_verdict(html: &mut String, text: &DisplayText) {
    html.push_str("<section id=\"result\">\n");
    html.push_str(&format!(
        "<p class=\"verdict severity-{}\">Prediction Result: {}</p>\n",
        text.severity.as_str(),
        text.verdict
    ));
    html.push_str(&format!(
        "<h3>Prediction Probabilities</h3>\n<p class=\"probabilities\">{}</p>\n",
        text.probabilities
    ));
    html.push_str("</section>\n");
}

fn render_error(html: &mut String, detail: &str) {
    html.push_str("<section id=\"error\" class=\"error\">\n");
    html.push_str(&format!("<p>{}</p>\n", ERROR_MESSAGE));
    html.push_str(&format!("<pre>{}</pre>\n", escape_html(detail)));
    html.push_str("</section>\n");
}

fn group_name(group: FieldGroup) -> &'static str {
    match group {
        FieldGroup::Left => "left",
        FieldGroup::Right => "right",
    }
}

/// Escape text for use inside HTML elements and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;
    use crate::domain::present;

    fn select<'a>(document: &'a Html, selector: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).collect()
    }

    fn text(element: &scraper::ElementRef<'_>) -> String {
        element.text().collect::<String>()
    }

    #[test]
    fn test_blank_page_has_form_with_defaults() {
        let document = Html::parse_document(&render_page(&PageView::blank()));

        assert_eq!(text(&select(&document, "h1")[0]), TITLE);
        assert_eq!(select(&document, "input[type=number]").len(), 12);
        assert_eq!(select(&document, "fieldset.group-left input").len(), 6);
        assert_eq!(select(&document, "fieldset.group-right input").len(), 6);
        assert_eq!(text(&select(&document, "button")[0]), "Diagnose");

        let age = &select(&document, "input#age")[0];
        assert_eq!(age.value().attr("value"), Some("35"));
        assert_eq!(age.value().attr("min"), Some("10"));
        assert_eq!(age.value().attr("max"), Some("100"));
        assert_eq!(age.value().attr("step"), Some("1"));

        let urea = &select(&document, "input#urea")[0];
        assert_eq!(urea.value().attr("value"), Some("4.00"));
        assert_eq!(urea.value().attr("step"), Some("0.01"));

        assert!(select(&document, "#result").is_empty());
        assert!(select(&document, "#error").is_empty());
        assert_eq!(select(&document, "footer.disclaimer").len(), 1);
    }

    #[test]
    fn test_diagnosed_page_shows_tables_and_verdict() {
        let result = InferenceResult {
            label: 1,
            probabilities: [0.2, 0.5, 0.3],
            scaled: [0.25; 12],
        };
        let view = PageView {
            record: MedicalInputRecord::default(),
            outcome: Some(Outcome::Diagnosed {
                text: present(&result),
                result,
            }),
        };
        let document = Html::parse_document(&render_page(&view));

        assert_eq!(select(&document, "#inputs tr").len(), 13);
        assert_eq!(select(&document, "#scaled tr").len(), 13);
        assert!(text(&select(&document, "#scaled")[0]).contains("0.2500"));

        let verdict = &select(&document, "p.verdict")[0];
        assert!(text(verdict).contains("Possible Risk of Diabetes. Monitor regularly."));
        assert!(verdict.value().classes().any(|c| c == "severity-warning"));

        assert_eq!(
            text(&select(&document, "p.probabilities")[0]),
            "No Diabetes: 0.20, Possible Risk: 0.50, Diabetes: 0.30"
        );
    }

    #[test]
    fn test_error_page_escapes_detail() {
        let view = PageView {
            record: MedicalInputRecord::default(),
            outcome: Some(Outcome::Failed {
                detail: "Invalid age '<script>': not a number".to_string(),
            }),
        };
        let html = render_page(&view);
        let document = Html::parse_document(&html);

        assert!(!html.contains("<script>"));
        assert!(text(&select(&document, "#error")[0]).contains(ERROR_MESSAGE));
        assert_eq!(
            text(&select(&document, "#error pre")[0]),
            "Invalid age '<script>': not a number"
        );
        assert!(select(&document, "#result").is_empty());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("BMI (kg/m²)"), "BMI (kg/m²)");
    }
}
