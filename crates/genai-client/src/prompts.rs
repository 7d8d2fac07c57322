//! Prompt templates for the generation flows.
//!
//! Each flow asks the model for exactly one JSON object in the shape of the
//! matching lookup response record. Placeholders use `{{name}}`.

/// One generation flow per lookup capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    ImdbRating,
    RottenTomatoesRating,
    MovieCast,
    MovieSuggestions,
}

impl Flow {
    /// Wire name sent in `GenerateRequest.flow`
    pub fn name(&self) -> &'static str {
        match self {
            Flow::ImdbRating => "imdb_rating",
            Flow::RottenTomatoesRating => "rotten_tomatoes_rating",
            Flow::MovieCast => "movie_cast",
            Flow::MovieSuggestions => "movie_suggestions",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Flow::ImdbRating => IMDB_RATING_PROMPT,
            Flow::RottenTomatoesRating => ROTTEN_TOMATOES_PROMPT,
            Flow::MovieCast => MOVIE_CAST_PROMPT,
            Flow::MovieSuggestions => MOVIE_SUGGESTIONS_PROMPT,
        }
    }
}

pub const IMDB_RATING_PROMPT: &str = r#"
Find the IMDb rating for the movie "{{movieTitle}}".
Reply with ONLY a JSON object of the form {"imdbRating": "<rating>"}.
Use "N/A" when the rating is not available. Do not add any other text.
"#;

pub const ROTTEN_TOMATOES_PROMPT: &str = r#"
Find the Rotten Tomatoes rating for the movie "{{movieTitle}}" (e.g. "90%").
Reply with ONLY a JSON object of the form {"rottenTomatoesRating": "<rating>"}.
Use "N/A" when the rating is not available. Do not add any other text.
"#;

pub const MOVIE_CAST_PROMPT: &str = r#"
Find the lead actor and lead actress for the movie "{{movieTitle}}".
For animated movies, voice actors are acceptable.
If there is no clear single lead (e.g. an ensemble cast), use "N/A".
Reply with ONLY a JSON object of the form {"leadActor": "...", "leadActress": "..."}.
"#;

pub const MOVIE_SUGGESTIONS_PROMPT: &str = r#"
Based on the query "{{query}}", provide up to 5 movie titles that are likely matches.
Examples:
- query: "star w" -> ["Star Wars: A New Hope", "Star Wars: The Empire Strikes Back", "Star Trek", "Stargate"]
- query: "bat" -> ["Batman Begins", "The Batman", "Batman v Superman: Dawn of Justice", "Battlefield Earth"]
- query: "lord of the r" -> ["The Lord of the Rings: The Fellowship of the Ring", "The Lord of the Rings: The Two Towers", "The Lord of the Rings: The Return of the King"]
Only list real movie titles, as diverse as possible. If nothing fits or the
query is too vague, return an empty list.
Reply with ONLY a JSON object of the form {"suggestions": ["..."]}.
"#;

/// Substitute `{{name}}` placeholders. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.trim().to_string();
    for (name, value) in vars {
        rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
    }
    rendered
}

/// Pull the JSON object out of a model reply.
///
/// Handles a bare object, a ```json fenced block, or an object surrounded by
/// chatter. Returns the trimmed input when no braces are found.
pub fn extract_json(text: &str) -> &str {
    let text = text.trim();
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
