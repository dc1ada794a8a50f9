use serde::{Deserialize, Serialize};

use crate::highlights::{HighlightToken, RenderedHighlight, TeamColor};

const DEFAULT_RED: &str = "#fa5252";
const DEFAULT_BLUE: &str = "#228be6";

/// Team color mapping handed to whatever draws highlight rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamPalette {
    pub red: String,
    pub blue: String,
    /// Prefix joined with an icon's asset name to locate its image.
    pub icon_base_path: String,
}

impl Default for TeamPalette {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED.to_string(),
            blue: DEFAULT_BLUE.to_string(),
            icon_base_path: "killicons".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledSpan {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TeamPalette {
    pub fn color_for(&self, color: TeamColor) -> &str {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }

    pub fn style(&self, rendered: &RenderedHighlight) -> Vec<StyledSpan> {
        rendered
            .tokens
            .iter()
            .map(|token| match token {
                HighlightToken::Text { text } => StyledSpan {
                    text: text.clone(),
                    color: None,
                    icon: None,
                },
                HighlightToken::Player { name, color } => StyledSpan {
                    text: name.clone(),
                    color: color.map(|color| self.color_for(color).to_string()),
                    icon: None,
                },
                HighlightToken::Icon { icon } => StyledSpan {
                    text: String::new(),
                    color: None,
                    icon: Some(format!("{}/{}.png", self.icon_base_path, icon.asset_name())),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TeamPalette;
    use crate::highlights::{resolve, Highlight, PointCapturedHighlight};
    use crate::summary::tests::player;
    use crate::summary::{PlayerLookup, Team};

    #[test]
    fn styles_names_and_icons_from_palette() {
        let palette = TeamPalette {
            red: "crimson".to_string(),
            ..TeamPalette::default()
        };
        let players = PlayerLookup::from_players(vec![player(5, "Scout Main", Team::Other)]);
        let rendered = resolve(
            &Highlight::PointCaptured(PointCapturedHighlight {
                point_name: "Last".to_string(),
                capturing_team: 2,
                cappers: vec![5],
            }),
            &players,
        );

        let spans = palette.style(&rendered);
        assert_eq!(spans[0].text, "Scout Main");
        assert_eq!(spans[0].color.as_deref(), Some("crimson"));
        assert_eq!(spans[2].icon.as_deref(), Some("killicons/redcapture.png"));
        assert_eq!(spans.last().map(|span| span.text.as_str()), Some("captured Last"));
    }

    #[test]
    fn fills_missing_palette_fields_with_defaults() {
        let palette: TeamPalette = serde_json::from_str(r##"{ "blue": "#0000ff" }"##)
            .expect("Expected partial palette to decode");
        assert_eq!(palette.blue, "#0000ff");
        assert_eq!(palette.red, "#fa5252");
        assert_eq!(palette.icon_base_path, "killicons");
    }
}
