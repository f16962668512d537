// Prompt templates for the email copilot.
//
// Every template's system prompt embeds the shared persona so the model
// behaves consistently across drafting modes. Templates are versioned
// for reproducibility.

use std::collections::HashMap;

use super::errors::{PromptError, PromptResult};
use super::persona::EMAIL_ASSISTANT_PERSONA;

/// A named, versioned prompt template.
#[derive(Debug)]
pub struct PromptTemplate {
    pub name: String,
    pub version: String,
    pub system: String,
    pub user_template: String,
}

impl PromptTemplate {
    /// Renders the user template, substituting every `{{variable}}`
    /// marker from `variables`.
    ///
    /// Markers left unresolved after substitution are an error, not
    /// silently passed through to the model.
    pub fn render(&self, variables: &HashMap<String, String>) -> PromptResult<String> {
        let mut rendered = self.user_template.clone();
        for (key, value) in variables {
            rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
        }

        if let Some(start) = rendered.find("{{") {
            let variable = rendered[start + 2..]
                .split("}}")
                .next()
                .unwrap_or_default()
                .to_string();
            return Err(PromptError::MissingVariable {
                template: self.name.clone(),
                variable,
            });
        }

        Ok(rendered)
    }
}

pub mod library {
    use super::{PromptError, PromptResult, PromptTemplate, EMAIL_ASSISTANT_PERSONA};

    /// Compose a fresh outbound email from the rep's bullet points.
    pub fn email_draft() -> PromptTemplate {
        PromptTemplate {
            name: "email_draft".to_string(),
            version: "1.1.0".to_string(),
            system: EMAIL_ASSISTANT_PERSONA.to_string(),
            user_template: "Recipient: {{recipient}}\n\
                            Deal context: {{deal_context}}\n\n\
                            Draft an email covering these points:\n\
                            {{points}}"
                .to_string(),
        }
    }

    /// Reply to an incoming email in the rep's voice.
    pub fn email_reply() -> PromptTemplate {
        PromptTemplate {
            name: "email_reply".to_string(),
            version: "1.0.0".to_string(),
            system: EMAIL_ASSISTANT_PERSONA.to_string(),
            user_template: "Incoming email:\n\
                            {{incoming}}\n\n\
                            Deal context: {{deal_context}}\n\n\
                            Write the reply. Intent: {{intent}}"
                .to_string(),
        }
    }

    /// Post-meeting follow-up with agreed next steps.
    pub fn follow_up() -> PromptTemplate {
        PromptTemplate {
            name: "follow_up".to_string(),
            version: "1.0.0".to_string(),
            system: EMAIL_ASSISTANT_PERSONA.to_string(),
            user_template: "Meeting notes:\n\
                            {{notes}}\n\n\
                            Write a follow-up email to {{recipient}} confirming \
                            the next steps."
                .to_string(),
        }
    }

    /// Looks up a template by name.
    pub fn by_name(name: &str) -> PromptResult<PromptTemplate> {
        match name {
            "email_draft" => Ok(email_draft()),
            "email_reply" => Ok(email_reply()),
            "follow_up" => Ok(follow_up()),
            other => Err(PromptError::UnknownTemplate(other.to_string())),
        }
    }

    /// Every template the copilot ships with.
    pub fn all() -> Vec<PromptTemplate> {
        vec![email_draft(), email_reply(), follow_up()]
    }
}
