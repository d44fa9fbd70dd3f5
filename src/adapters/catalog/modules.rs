//! Feature modules: the ten dashboard tools, from the resume builder to the
//! AI chat. Each lands under `components/modules/`.

use super::render::render;
use crate::domain::{DomainError, ScaffoldFile, Section, TemplateContext};

const DASHBOARD_HOME: &str = include_str!("templates/modules/DashboardHome.js");
const RESUME_BUILDER: &str = include_str!("templates/modules/ResumeBuilder.js");
const CODE_IDE: &str = include_str!("templates/modules/CodeIDE.js");
const VOICE_ASSISTANT: &str = include_str!("templates/modules/VoiceAssistant.js");
const DOCUMENT_DESIGNER: &str = include_str!("templates/modules/DocumentDesigner.js");
const INVOICE_GENERATOR: &str = include_str!("templates/modules/InvoiceGenerator.js");
const PORTFOLIO_GENERATOR: &str = include_str!("templates/modules/PortfolioGenerator.js");
const PRESENTATION_DESIGNER: &str = include_str!("templates/modules/PresentationDesigner.js");
const CHAT_ROOMS: &str = include_str!("templates/modules/ChatRooms.js");
const AI_CHAT: &str = include_str!("templates/modules/AIChat.js");

/// (component name, template) in emission order.
const MODULES: [(&str, &str); 10] = [
    ("DashboardHome", DASHBOARD_HOME),
    ("ResumeBuilder", RESUME_BUILDER),
    ("CodeIDE", CODE_IDE),
    ("VoiceAssistant", VOICE_ASSISTANT),
    ("DocumentDesigner", DOCUMENT_DESIGNER),
    ("InvoiceGenerator", INVOICE_GENERATOR),
    ("PortfolioGenerator", PORTFOLIO_GENERATOR),
    ("PresentationDesigner", PRESENTATION_DESIGNER),
    ("ChatRooms", CHAT_ROOMS),
    ("AIChat", AI_CHAT),
];

pub fn files(ctx: &TemplateContext) -> Result<Vec<ScaffoldFile>, DomainError> {
    MODULES
        .iter()
        .map(|(name, template)| {
            Ok(ScaffoldFile::new(
                format!("components/modules/{name}.js"),
                render(template, ctx)?,
                Section::Modules,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_all_ten_modules_under_components() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();

        assert_eq!(files.len(), 10);
        for file in &files {
            assert!(file.path.starts_with("components/modules/"));
            assert!(file.path.ends_with(".js"));
            assert!(!file.content.is_empty());
        }
    }

    #[test]
    fn monaco_editor_options_survive_rendering() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let ide = files
            .iter()
            .find(|f| f.path == "components/modules/CodeIDE.js")
            .unwrap();

        // `options={{` opens a JSX object literal, not a placeholder
        assert!(ide.content.contains("options={{"));
        assert!(ide.content.contains("@monaco-editor/react"));
    }

    #[test]
    fn voice_assistant_keeps_speech_metrics() {
        let ctx = TemplateContext::default();
        let files = files(&ctx).unwrap();
        let voice = files
            .iter()
            .find(|f| f.path == "components/modules/VoiceAssistant.js")
            .unwrap();

        assert!(voice.content.contains("webkitSpeechRecognition"));
        assert!(voice.content.contains("fillerWords"));
        assert!(voice.content.contains("wpm"));
    }
}
