use anyhow::{anyhow, Result};
use std::time::Instant;
use tera::{Context, Tera};
use tracing::info;

use replies::Reply;

const TEMPLATES: [(&str, &str); 18] = [
    ("simpleReply.txt", include_str!("../text/replies/simpleReply.txt")),
    ("errorReply.txt", include_str!("../text/replies/errorReply.txt")),
    ("registeredReply.txt", include_str!("../text/replies/registeredReply.txt")),
    ("welcomeReply.txt", include_str!("../text/replies/welcomeReply.txt")),
    ("scoreReply.txt", include_str!("../text/replies/scoreReply.txt")),
    ("historyReply.txt", include_str!("../text/replies/historyReply.txt")),
    ("pointsReply.txt", include_str!("../text/replies/pointsReply.txt")),
    ("reportReply.txt", include_str!("../text/replies/reportReply.txt")),
    ("tipsReply.txt", include_str!("../text/replies/tipsReply.txt")),
    ("questionsReply.txt", include_str!("../text/replies/questionsReply.txt")),
    ("answerReply.txt", include_str!("../text/replies/answerReply.txt")),
    ("checklistsReply.txt", include_str!("../text/replies/checklistsReply.txt")),
    ("routineReply.txt", include_str!("../text/replies/routineReply.txt")),
    ("adviceReply.txt", include_str!("../text/replies/adviceReply.txt")),
    ("comingSoonReply.txt", include_str!("../text/replies/comingSoonReply.txt")),
    ("menuReply.txt", include_str!("../text/replies/menuReply.txt")),
    ("analysisFormReply.txt", include_str!("../text/replies/analysisFormReply.txt")),
    ("helpReply.txt", include_str!("../text/replies/helpReply.txt")),
];

/// Renders tagged reply JSON as plain text, one template per tag.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let started = Instant::now();
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        let elapsed = Instant::now() - started;
        info!(?elapsed, "compiled");

        Ok(Self { tera })
    }

    pub fn render_value(&self, value: &serde_json::Value) -> Result<String> {
        let serde_json::Value::Object(object) = value else {
            return Err(anyhow!("Unexpected reply: {}", value));
        };

        let mut all = Vec::new();

        for (key, value) in object {
            let mut context = Context::new();
            context.insert(key, &value);

            let text = self.tera.render(&format!("{}.txt", key), &context)?;
            all.push(text.trim().to_owned());
        }

        Ok(all.join("\n"))
    }

    pub fn render_reply(&self, reply: &dyn Reply) -> Result<String> {
        self.render_value(&reply.to_tagged_json()?)
    }
}
