//!
//! src/encode.rs
//!
//! Renders domain values back into the service's XML shape. The
//! service itself never ingests records, so this exists for fixtures,
//! round-trip checks, and serving realistic payloads from test servers.
//!

use std::fmt::Write as _;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::decode::{POSTED_FORMAT, STAMP_FORMAT, VIDEO_POSTED_FORMAT};
use crate::model::{RemoteFile, Tag, TagVideo};

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn push_element(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, "<{name}>{}</{name}>", esc(value));
}

fn push_optional(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_element(out, name, value);
    }
}

fn push_file(out: &mut String, name: &str, file: &RemoteFile) {
    match &file.format {
        Some(format) => {
            let _ = write!(out, r#"<{name} type="{}">"#, esc(format.extension()));
        }
        None => {
            let _ = write!(out, "<{name}>");
        }
    }
    out.push_str(&esc(file.url.as_str()));
    if let Some(data) = &file.data {
        let _ = write!(out, "<dataBlob>{}</dataBlob>", BASE64.encode(data));
    }
    let _ = write!(out, "</{name}>");
}

fn push_video(out: &mut String, video: &TagVideo) {
    out.push_str("<video>");
    push_element(out, "id", &video.id.to_string());
    push_element(
        out,
        "posted",
        &video.posted.format(VIDEO_POSTED_FORMAT).to_string(),
    );
    push_optional(out, "Desc", video.description.as_deref());
    push_optional(out, "sungKey", video.sung_key.map(|k| k.wire()).as_deref());
    push_element(out, "multitrack", if video.multitrack { "Yes" } else { "No" });
    push_optional(out, "Code", video.youtube_id.as_deref());
    push_optional(out, "Facebook", video.facebook_url.as_ref().map(|u| u.as_str()));
    push_optional(out, "SungBy", video.author.as_deref());
    push_optional(
        out,
        "SungWebsite",
        video.author_website.as_ref().map(|u| u.as_str()),
    );
    out.push_str("</video>");
}

/// Render a single record element.
pub fn encode_tag(tag: &Tag) -> String {
    let mut out = String::from("<tag>");

    push_element(&mut out, "id", &tag.id.to_string());
    push_element(&mut out, "title", &tag.title);
    push_element(&mut out, "type", tag.voicing_type.wire());
    push_element(
        &mut out,
        "posted",
        &tag.posted.format(POSTED_FORMAT).to_string(),
    );
    push_element(&mut out, "rating", &tag.rating.to_string());
    push_element(&mut out, "ratingCount", &tag.rating_count.to_string());
    push_element(&mut out, "downloaded", &tag.downloaded.to_string());
    push_element(
        &mut out,
        "stamp",
        &tag.stamp.format(STAMP_FORMAT).to_string(),
    );

    push_optional(&mut out, "altTitle", tag.alt_title.as_deref());
    push_optional(&mut out, "version", tag.version.as_deref());
    push_optional(&mut out, "writKey", tag.key.map(|k| k.wire()).as_deref());
    if let Some(parts) = tag.parts {
        let value = if parts == u32::MAX {
            "other".to_string()
        } else {
            parts.to_string()
        };
        push_element(&mut out, "parts", &value);
    }
    push_optional(
        &mut out,
        "recording",
        tag.recording_method.map(|m| m.wire()),
    );
    push_optional(
        &mut out,
        "teachVid",
        tag.learning_video_youtube_id.as_deref(),
    );
    push_optional(&mut out, "notes", tag.notes.as_deref());
    push_optional(&mut out, "arranger", tag.arranger.as_deref());
    push_optional(
        &mut out,
        "arrWebsite",
        tag.arranger_website.as_ref().map(|u| u.as_str()),
    );
    push_optional(&mut out, "sungBy", tag.sung_by.as_deref());
    push_optional(
        &mut out,
        "sungWebsite",
        tag.sung_website.as_ref().map(|u| u.as_str()),
    );
    push_optional(
        &mut out,
        "sungYear",
        tag.sung_year.map(|d| d.format("%Y").to_string()).as_deref(),
    );
    push_optional(&mut out, "quartet", tag.learning_track_artist.as_deref());
    push_optional(
        &mut out,
        "qWebsite",
        tag.learning_track_artist_website.as_ref().map(|u| u.as_str()),
    );
    push_optional(&mut out, "teacher", tag.teacher.as_deref());
    push_optional(
        &mut out,
        "tWebsite",
        tag.teacher_website.as_ref().map(|u| u.as_str()),
    );
    push_optional(&mut out, "provider", tag.provider.as_deref());
    push_optional(
        &mut out,
        "provWebsite",
        tag.provider_website.as_ref().map(|u| u.as_str()),
    );
    push_optional(
        &mut out,
        "classic",
        tag.classic_index.map(|i| i.to_string()).as_deref(),
    );
    push_optional(&mut out, "collection", tag.collection.map(|c| c.wire()));

    let files = [
        ("sheetMusic", &tag.sheet_music),
        ("notation", &tag.notation_file),
        ("allParts", &tag.all_parts_track),
        ("tenor", &tag.tenor_learning_track),
        ("lead", &tag.lead_learning_track),
        ("bari", &tag.bari_learning_track),
        ("bass", &tag.bass_learning_track),
        ("other1", &tag.other1_learning_track),
        ("other2", &tag.other2_learning_track),
        ("other3", &tag.other3_learning_track),
        ("other4", &tag.other4_learning_track),
    ];
    for (name, slot) in files {
        if let Some(file) = slot {
            push_file(&mut out, name, file);
        }
    }

    push_optional(&mut out, "lyrics", tag.lyrics.as_deref());

    if let Some(videos) = &tag.videos {
        let _ = write!(
            out,
            r#"<videos available="{0}" count="{0}">"#,
            videos.len()
        );
        for video in videos {
            push_video(&mut out, video);
        }
        out.push_str("</videos>");
    }

    out.push_str("</tag>");
    out
}

/// Render a bare record list, the shape of a fetch-by-id response.
pub fn encode_tag_list(tags: &[Tag]) -> String {
    let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><tags>"#);
    for tag in tags {
        out.push_str(&encode_tag(tag));
    }
    out.push_str("</tags>");
    out
}

/// Render a search envelope with its `available` attribute.
pub fn encode_query_result(available: u32, tags: &[Tag]) -> String {
    let mut out = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><tags available="{available}">"#
    );
    for tag in tags {
        out.push_str(&encode_tag(tag));
    }
    out.push_str("</tags>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_query_result, decode_tag_list};
    use crate::model::{FileFormat, RemoteFile};
    use url::Url;

    #[test]
    fn fixture_round_trips_every_field() {
        let original = Tag::fixture();
        let xml = encode_tag_list(std::slice::from_ref(&original));
        let decoded = decode_tag_list(&xml).unwrap().into_iter().next().unwrap();

        assert_eq!(decoded.id, original.id);
        assert_eq!(decoded.title, original.title);
        assert_eq!(decoded.voicing_type, original.voicing_type);
        assert_eq!(decoded.posted, original.posted);
        assert_eq!(decoded.rating, original.rating);
        assert_eq!(decoded.rating_count, original.rating_count);
        assert_eq!(decoded.downloaded, original.downloaded);
        assert_eq!(decoded.stamp, original.stamp);
        assert_eq!(decoded.alt_title, original.alt_title);
        assert_eq!(decoded.version, original.version);
        assert_eq!(decoded.key, original.key);
        assert_eq!(decoded.parts, original.parts);
        assert_eq!(decoded.recording_method, original.recording_method);
        assert_eq!(
            decoded.learning_video_youtube_id,
            original.learning_video_youtube_id
        );
        assert_eq!(decoded.notes, original.notes);
        assert_eq!(decoded.arranger, original.arranger);
        assert_eq!(decoded.arranger_website, original.arranger_website);
        assert_eq!(decoded.sung_by, original.sung_by);
        assert_eq!(decoded.sung_website, original.sung_website);
        assert_eq!(decoded.sung_year, original.sung_year);
        assert_eq!(decoded.learning_track_artist, original.learning_track_artist);
        assert_eq!(
            decoded.learning_track_artist_website,
            original.learning_track_artist_website
        );
        assert_eq!(decoded.teacher, original.teacher);
        assert_eq!(decoded.teacher_website, original.teacher_website);
        assert_eq!(decoded.provider, original.provider);
        assert_eq!(decoded.provider_website, original.provider_website);
        assert_eq!(decoded.classic_index, original.classic_index);
        assert_eq!(decoded.collection, original.collection);
        assert_eq!(decoded.sheet_music, original.sheet_music);
        assert_eq!(decoded.notation_file, original.notation_file);
        assert_eq!(decoded.all_parts_track, original.all_parts_track);
        assert_eq!(decoded.lyrics, original.lyrics);
        assert_eq!(decoded.tenor_learning_track, original.tenor_learning_track);
        assert_eq!(decoded.lead_learning_track, original.lead_learning_track);
        assert_eq!(decoded.bari_learning_track, original.bari_learning_track);
        assert_eq!(decoded.bass_learning_track, original.bass_learning_track);
        assert_eq!(decoded.other1_learning_track, original.other1_learning_track);
        assert_eq!(decoded.other2_learning_track, original.other2_learning_track);
        assert_eq!(decoded.other3_learning_track, original.other3_learning_track);
        assert_eq!(decoded.other4_learning_track, original.other4_learning_track);
        assert_eq!(decoded.videos, original.videos);
    }

    #[test]
    fn parts_sentinel_encodes_as_other() {
        let mut tag = Tag::fixture();
        tag.parts = Some(u32::MAX);
        let xml = encode_tag(&tag);
        assert!(xml.contains("<parts>other</parts>"));

        let round = decode_tag_list(&format!("<tags>{xml}</tags>"))
            .unwrap()
            .remove(0);
        assert_eq!(round.parts, Some(u32::MAX));
    }

    #[test]
    fn file_payload_survives_encode_decode() {
        let mut tag = Tag::fixture();
        let mut file = RemoteFile::new(
            Url::parse("https://example.com/notes.pdf").unwrap(),
            Some(FileFormat::Pdf),
        );
        file.data = Some(vec![0x25, 0x50, 0x44, 0x46]);
        tag.sheet_music = Some(file.clone());

        let xml = encode_tag_list(std::slice::from_ref(&tag));
        let decoded = decode_tag_list(&xml).unwrap().remove(0);
        assert_eq!(decoded.sheet_music, Some(file));
    }

    #[test]
    fn markup_in_text_is_escaped() {
        let mut tag = Tag::fixture();
        tag.title = "Shine On <Me> & You".to_string();
        tag.notes = Some("a < b && c > d".to_string());

        let xml = encode_tag_list(std::slice::from_ref(&tag));
        let decoded = decode_tag_list(&xml).unwrap().remove(0);
        assert_eq!(decoded.title, "Shine On <Me> & You");
        assert_eq!(decoded.notes.as_deref(), Some("a < b && c > d"));
    }

    #[test]
    fn envelope_attribute_round_trips() {
        let tags = vec![Tag::fixture()];
        let xml = encode_query_result(2479, &tags);
        let result = decode_query_result(&xml).unwrap();
        assert_eq!(result.available, 2479);
        assert_eq!(result.tags.len(), 1);
    }
}
