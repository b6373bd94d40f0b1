use crate::api::models::{Email, RawEmailRecord};

pub fn normalize(raw: RawEmailRecord) -> Email {
    Email {
        id: raw.id.unwrap_or_default(),
        from: raw.sender.unwrap_or_default(),
        to: raw.to.unwrap_or_default(),
        cc: raw.cc.unwrap_or_default(),
        subject: raw.subject.unwrap_or_default(),
        date: raw.date.unwrap_or_default(),
        snippet: raw.snippet.unwrap_or_default(),
        category: raw.category_pred,
        priority_score: raw.priority_score,
        thread_id: raw.thread_id.unwrap_or_default(),
        has_attachment: raw.has_attachment.unwrap_or(false),
        attachments: raw.attachment_info.unwrap_or_default(),
    }
}

pub fn normalize_all(records: Vec<RawEmailRecord>) -> Vec<Email> {
    records.into_iter().map(normalize).collect()
}
