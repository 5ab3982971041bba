//! Prompt construction for push summaries.

use crate::github::Repository;

/// System message sent to every backend.
pub const SYSTEM_INSTRUCTION: &str = "You are a technical writer converting commits into factual, \
user-impact announcements. You only describe what the diff shows and you always answer with a \
single JSON object.";

/// Build the user prompt for summarising a push.
///
/// The prompt embeds the repository name and the windowed diff verbatim and
/// spells out the JSON contract parsed by [`crate::llm::json::parse_summary`].
/// It is a pure function of its arguments.
pub fn build_prompt(repository: &Repository, windowed_diff: &str) -> String {
    format!(
        r#"Write a short announcement for the users of "{repo}" describing what changed in this update.

## Diff
The diff below shows only changed lines and one line of context around each change.
```diff
{diff}
```

## Evidence Rules (STRICT)
- Every bullet MUST be traceable to a change that is visible in the diff above.
- If you cannot point to a changed line that proves a claim, leave the bullet out.
- Do not guess at intent, motivation, or behaviour that the diff does not show.

## What Counts As A Change
- Only include changes an end user would notice: new features, removed features, visible fixes,
  changed wording, changed behaviour, changed defaults.
- Purely internal or technical changes (refactoring, tests, CI, dependency bumps, formatting,
  logging, build configuration) NEVER produce a bullet.
- If nothing in the diff is visible to users, return an empty "changes" array.

## Banned Content
- File names or paths
- Function, variable, class, or other code identifiers
- Developer jargon (refactor, endpoint, schema, payload, null, regex, ...)
- Marketing language (exciting, powerful, seamless, revolutionary, ...)
- Emojis

## Output Format
Respond with a single JSON object and nothing else:
{{"summary": "one plain sentence describing the update", "changes": ["first user-facing change", "second user-facing change"]}}

"summary" is a string. "changes" is an array of strings and may be empty ([]).
Each change is one short sentence in plain language.

## Examples
Good:
{{"summary": "Profiles can now show a custom banner.", "changes": ["You can upload a banner image from your profile settings", "Banners appear at the top of your public profile"]}}

Good (internal-only update):
{{"summary": "Behind-the-scenes maintenance with no visible changes.", "changes": []}}

Bad (file names, identifiers, jargon):
{{"summary": "Refactored UserService", "changes": ["Updated src/user/service.rs to call validate_banner()"]}}

Bad (marketing language, emojis, claims not in the diff):
{{"summary": "An exciting new release! 🚀", "changes": ["Blazing fast performance everywhere"]}}"#,
        repo = repository.name,
        diff = windowed_diff,
    )
}
