//! Placeholder rendering for payload templates.
//!
//! Token syntax is strict: `{{key}}` where `key` is lowercase snake_case
//! (`[a-z][a-z0-9_]*`) with no surrounding whitespace. Everything else that
//! merely looks like braces passes through untouched, which keeps GitHub
//! Actions expressions (`${{ secrets.X }}`) and JSX props (`value={{ user `)
//! inside payloads intact.

use crate::domain::{DomainError, TemplateContext};

/// Substitute `{{key}}` tokens in `template` from `ctx`.
///
/// # Errors
/// A well-formed token whose key is unknown to the context is a
/// [`DomainError::Template`]; payloads must never ship unresolved tokens.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String, DomainError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match token_end(after) {
            Some(end) => {
                let key = &after[..end];
                match ctx.value(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(DomainError::Template(format!(
                            "unknown placeholder '{{{{{key}}}}}'"
                        )));
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                // Braces without token syntax; emit literally and move on.
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Byte offset of the closing `}}` when `rest` opens with a well-formed
/// token key, else None.
fn token_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_lowercase) {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'a'..=b'z' | b'0'..=b'9' | b'_' => i += 1,
            b'}' => {
                return if bytes.get(i + 1) == Some(&b'}') {
                    Some(i)
                } else {
                    None
                };
            }
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_tokens() {
        let ctx = TemplateContext::default();
        let out = render("# {{project_name}} ({{project_slug}})", &ctx).unwrap();
        assert_eq!(out, "# ORBIT AI (orbit-ai)");
    }

    #[test]
    fn unknown_token_is_an_error() {
        let ctx = TemplateContext::default();
        let err = render("hello {{does_not_exist}}", &ctx).unwrap_err();
        assert!(matches!(err, DomainError::Template(_)));
        assert!(err.to_string().contains("{{does_not_exist}}"));
    }

    #[test]
    fn github_actions_expressions_pass_through() {
        let ctx = TemplateContext::default();
        let yaml = "token: ${{ secrets.FIREBASE_TOKEN }}";
        assert_eq!(render(yaml, &ctx).unwrap(), yaml);
    }

    #[test]
    fn jsx_double_braces_pass_through() {
        let ctx = TemplateContext::default();
        let jsx = "<AuthContext.Provider value={{ user, loading }}>";
        assert_eq!(render(jsx, &ctx).unwrap(), jsx);
        let multiline = "options={{\n  minimap: { enabled: false },\n}}";
        assert_eq!(render(multiline, &ctx).unwrap(), multiline);
    }

    #[test]
    fn uppercase_and_empty_braces_pass_through() {
        let ctx = TemplateContext::default();
        assert_eq!(render("{{NOT_A_TOKEN}}", &ctx).unwrap(), "{{NOT_A_TOKEN}}");
        assert_eq!(render("a {{}} b", &ctx).unwrap(), "a {{}} b");
        assert_eq!(render("tail {{", &ctx).unwrap(), "tail {{");
    }

    #[test]
    fn token_at_string_edges() {
        let ctx = TemplateContext::default();
        assert_eq!(render("{{project_slug}}", &ctx).unwrap(), "orbit-ai");
        assert_eq!(
            render("{{project_slug}}/{{project_slug}}", &ctx).unwrap(),
            "orbit-ai/orbit-ai"
        );
    }
}
