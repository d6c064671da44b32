//! Prompt templates for the ask pipeline.
//! Reuses cross-cutting fragments from llm_client::prompts.

use crate::ask::validation::ValidatedQuery;
use crate::llm_client::prompts::{MARKDOWN_OUTPUT_INSTRUCTION, UNTRUSTED_INPUT_INSTRUCTION};
use crate::llm_client::Prompt;

/// System instruction template. Replace: {profile}, {markdown_instruction}, {untrusted_instruction}
pub const ASK_SYSTEM_TEMPLATE: &str = "Tu es Synergie, un assistant qui accompagne les \
    personnes dans leurs démarches de mobilité internationale : visas, titres de séjour, \
    emploi, études et installation. L'utilisateur a choisi le profil « {profile} ». \
    Adapte chaque réponse à ce profil, donne des étapes concrètes et signale quand une \
    information doit être vérifiée auprès d'une source officielle.\n\n\
    {markdown_instruction}\n\n\
    {untrusted_instruction}";

/// User content template. Replace: {profile}, {query}
pub const ASK_USER_TEMPLATE: &str = "Profil : {profile}\n\nQuestion : {query}";

/// Builds the system + user prompt for a validated query. Pure.
pub fn build_prompt(validated: &ValidatedQuery) -> Prompt {
    let system = fill_template(
        ASK_SYSTEM_TEMPLATE,
        &[
            ("profile", validated.profile.as_str()),
            ("markdown_instruction", MARKDOWN_OUTPUT_INSTRUCTION),
            ("untrusted_instruction", UNTRUSTED_INPUT_INSTRUCTION),
        ],
    );
    let content = fill_template(
        ASK_USER_TEMPLATE,
        &[
            ("profile", validated.profile.as_str()),
            ("query", validated.query.as_str()),
        ],
    );

    Prompt { system, content }
}

/// Single-pass `{name}` substitution. Inserted values are never re-scanned,
/// and unknown placeholders are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated(query: &str, profile: &str) -> ValidatedQuery {
        ValidatedQuery {
            query: query.to_string(),
            profile: profile.to_string(),
        }
    }

    #[test]
    fn test_build_prompt_substitutes_profile_and_query() {
        let prompt = build_prompt(&validated("Quel visa pour un ingénieur ?", "Ingénieur"));
        assert!(prompt.system.contains("« Ingénieur »"));
        assert!(prompt.system.contains("Markdown"));
        assert_eq!(
            prompt.content,
            "Profil : Ingénieur\n\nQuestion : Quel visa pour un ingénieur ?"
        );
    }

    #[test]
    fn test_build_prompt_leaves_no_placeholders() {
        let prompt = build_prompt(&validated("q", "p"));
        for placeholder in ["{profile}", "{query}", "{markdown_instruction}", "{untrusted_instruction}"] {
            assert!(!prompt.system.contains(placeholder));
            assert!(!prompt.content.contains(placeholder));
        }
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let input = validated("Comment obtenir un titre de séjour ?", "Étudiant");
        assert_eq!(build_prompt(&input), build_prompt(&input));
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let prompt = build_prompt(&validated("<b>{profile}</b>", "{query}"));
        assert_eq!(prompt.content, "Profil : {query}\n\nQuestion : <b>{profile}</b>");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unbalanced_braces() {
        assert_eq!(
            fill_template("{a} {unknown} {", &[("a", "1")]),
            "1 {unknown} {"
        );
    }
}
