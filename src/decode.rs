//!
//! src/decode.rs
//!
//! Lenient decoding of the service's XML payloads into the domain
//! model. Decoding is best-effort and field-isolated: a corrupt
//! optional field degrades to absence and a corrupt required field to
//! its documented default, so a single bad value never loses the rest
//! of the record. Only envelope-level problems are fatal.
//!

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{NaiveDate, NaiveDateTime};
use roxmltree::{Document, Node};
use tracing::debug;
use url::Url;

use crate::errors::TagError;
use crate::model::{
    Collection, FileFormat, Key, Note, RecordingMethod, RemoteFile, Tag, TagQueryResult,
    TagVideo, Tonality, VoicingType,
};

/// Pattern for the tag posted date, e.g. "Sun, 6 Feb 2022".
pub const POSTED_FORMAT: &str = "%a, %d %b %Y";
/// Pattern for the last-update stamp, e.g. "2022-02-06 13:37:00".
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Pattern for a video's posted date. Same shape as the tag's.
pub const VIDEO_POSTED_FORMAT: &str = "%a, %d %b %Y";

/// The service capitalizes the leading letter of element names; wire
/// names here use the lowered form. Compare with the first ASCII letter
/// case-folded on both sides.
fn wire_name_eq(a: &str, b: &str) -> bool {
    let mut ac = a.chars();
    let mut bc = b.chars();
    match (ac.next(), bc.next()) {
        (Some(x), Some(y)) => {
            x.to_ascii_lowercase() == y.to_ascii_lowercase() && ac.as_str() == bc.as_str()
        }
        (None, None) => true,
        _ => false,
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, wire: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .filter(Node::is_element)
        .find(|c| wire_name_eq(c.tag_name().name(), wire))
}

/// Empty strings collapse to absence, everywhere.
fn string_field<'a>(node: Node<'a, '_>, wire: &str) -> Option<&'a str> {
    child(node, wire)
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn owned_string_field(node: Node, wire: &str) -> Option<String> {
    string_field(node, wire).map(str::to_owned)
}

fn int_field(node: Node, wire: &str) -> Option<i64> {
    string_field(node, wire)?.parse().ok()
}

fn uint_field(node: Node, wire: &str) -> Option<u32> {
    string_field(node, wire)?.parse().ok()
}

fn float_field(node: Node, wire: &str) -> Option<f64> {
    string_field(node, wire)?.parse().ok()
}

fn url_field(node: Node, wire: &str) -> Option<Url> {
    string_field(node, wire).and_then(|s| Url::parse(s).ok())
}

/// ISO form first, then the field-specific pattern.
fn date_field(node: Node, wire: &str, pattern: &str) -> Option<NaiveDate> {
    let s = string_field(node, wire)?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, pattern).ok())
}

fn datetime_field(node: Node, wire: &str, pattern: &str) -> Option<NaiveDateTime> {
    let s = string_field(node, wire)?;
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, pattern).ok())
}

/// A bare year, or a full ISO date.
fn year_field(node: Node, wire: &str) -> Option<NaiveDate> {
    let s = string_field(node, wire)?;
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            s.parse::<i32>()
                .ok()
                .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        })
}

/// Positive integer, or the literal token "other" for the unbounded
/// sentinel. Anything else is absent, never zero.
fn parts_field(node: Node, wire: &str) -> Option<u32> {
    let s = string_field(node, wire)?;
    if s == "other" {
        return Some(u32::MAX);
    }
    s.parse().ok()
}

/// Accepts the structured `<writKey><tonality/><note/></writKey>` form
/// or the colon-delimited string. Malformed keys are contained to field
/// absence here.
fn key_field(node: Node, wire: &str) -> Option<Key> {
    let el = child(node, wire)?;

    let sub = |name: &str| {
        child(el, name)
            .and_then(|c| c.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    };
    if let (Some(t), Some(n)) = (sub("tonality"), sub("note")) {
        return match (Tonality::from_wire(t), Note::from_wire(n)) {
            (Some(tonality), Some(note)) => Some(Key { note, tonality }),
            _ => {
                debug!(field = wire, tonality = t, note = n, "tag.decode.key.skip");
                None
            }
        };
    }

    let s = el.text().map(str::trim).filter(|t| !t.is_empty())?;
    match Key::parse(s) {
        Ok(key) => Some(key),
        Err(_) => {
            debug!(field = wire, value = s, "tag.decode.key.skip");
            None
        }
    }
}

/// A remote file element: the URL is the element text (mandatory), the
/// declared format the `type` attribute, and an optional base64 payload
/// in a `dataBlob` child.
fn decode_remote_file(node: Node) -> Result<RemoteFile, TagError> {
    let url_text = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .map(str::trim)
        .find(|t| !t.is_empty())
        .ok_or(TagError::MissingFileUrl)?;
    let url = Url::parse(url_text)
        .map_err(|e| TagError::Parse(format!("remote file url: {e}")))?;

    let format = node
        .attribute("type")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(FileFormat::from_extension);

    let data = match string_field(node, "dataBlob") {
        Some(blob) => Some(
            BASE64
                .decode(blob)
                .map_err(|e| TagError::Parse(format!("remote file payload: {e}")))?,
        ),
        None => None,
    };

    Ok(RemoteFile { url, format, data })
}

fn file_field(node: Node, wire: &str) -> Option<RemoteFile> {
    let el = child(node, wire)?;
    match decode_remote_file(el) {
        Ok(file) => Some(file),
        Err(e) => {
            debug!(field = wire, error = %e, "tag.decode.file.skip");
            None
        }
    }
}

fn decode_video(node: Node) -> Result<TagVideo, TagError> {
    let id = int_field(node, "id")
        .ok_or_else(|| TagError::Parse("video missing id".to_string()))?;
    let posted = date_field(node, "posted", VIDEO_POSTED_FORMAT)
        .ok_or_else(|| TagError::Parse("video posted date unreadable".to_string()))?;
    let sung_key = match string_field(node, "sungKey") {
        Some(s) => Some(Key::parse(s)?),
        None => None,
    };

    Ok(TagVideo {
        id,
        posted,
        description: owned_string_field(node, "Desc"),
        sung_key,
        multitrack: string_field(node, "multitrack") == Some("Yes"),
        youtube_id: owned_string_field(node, "Code"),
        facebook_url: url_field(node, "Facebook"),
        author: owned_string_field(node, "SungBy"),
        author_website: url_field(node, "SungWebsite"),
    })
}

/// The `<videos available count>` sub-envelope. Individual malformed
/// videos are skipped; an empty surviving list collapses to absence.
fn videos_field(node: Node, wire: &str) -> Option<Vec<TagVideo>> {
    let el = child(node, wire)?;
    let videos: Vec<TagVideo> = el
        .children()
        .filter(Node::is_element)
        .filter_map(|v| match decode_video(v) {
            Ok(video) => Some(video),
            Err(e) => {
                debug!(error = %e, "tag.decode.video.skip");
                None
            }
        })
        .collect();
    if videos.is_empty() { None } else { Some(videos) }
}

/// Decode one record element. Never fails: required fields fall back to
/// their documented defaults, optional fields to absence.
pub fn decode_tag(node: Node) -> Tag {
    Tag {
        id: int_field(node, "id").unwrap_or(-1),
        title: owned_string_field(node, "title").unwrap_or_default(),
        voicing_type: string_field(node, "type")
            .and_then(VoicingType::from_wire)
            .unwrap_or(VoicingType::Barbershop),
        posted: date_field(node, "posted", POSTED_FORMAT).unwrap_or(NaiveDate::MIN),
        rating: float_field(node, "rating").unwrap_or(0.0),
        rating_count: uint_field(node, "ratingCount").unwrap_or(0),
        downloaded: uint_field(node, "downloaded").unwrap_or(0),
        stamp: datetime_field(node, "stamp", STAMP_FORMAT).unwrap_or(NaiveDateTime::MIN),
        alt_title: owned_string_field(node, "altTitle"),
        version: owned_string_field(node, "version"),
        key: key_field(node, "writKey"),
        parts: parts_field(node, "parts"),
        recording_method: string_field(node, "recording")
            .and_then(RecordingMethod::from_wire),
        learning_video_youtube_id: owned_string_field(node, "teachVid"),
        notes: owned_string_field(node, "notes"),
        arranger: owned_string_field(node, "arranger"),
        arranger_website: url_field(node, "arrWebsite"),
        sung_by: owned_string_field(node, "sungBy"),
        sung_website: url_field(node, "sungWebsite"),
        sung_year: year_field(node, "sungYear"),
        learning_track_artist: owned_string_field(node, "quartet"),
        learning_track_artist_website: url_field(node, "qWebsite"),
        teacher: owned_string_field(node, "teacher"),
        teacher_website: url_field(node, "tWebsite"),
        provider: owned_string_field(node, "provider"),
        provider_website: url_field(node, "provWebsite"),
        classic_index: uint_field(node, "classic"),
        collection: string_field(node, "collection").and_then(Collection::from_wire),
        sheet_music: file_field(node, "sheetMusic"),
        notation_file: file_field(node, "notation"),
        all_parts_track: file_field(node, "allParts"),
        lyrics: owned_string_field(node, "lyrics"),
        tenor_learning_track: file_field(node, "tenor"),
        lead_learning_track: file_field(node, "lead"),
        bari_learning_track: file_field(node, "bari"),
        bass_learning_track: file_field(node, "bass"),
        other1_learning_track: file_field(node, "other1"),
        other2_learning_track: file_field(node, "other2"),
        other3_learning_track: file_field(node, "other3"),
        other4_learning_track: file_field(node, "other4"),
        videos: videos_field(node, "videos"),
    }
}

/// Decode every record element under the root. Used for fetch-by-id
/// responses, which carry no envelope attributes.
pub fn decode_tag_list(xml: &str) -> Result<Vec<Tag>, TagError> {
    let doc = Document::parse(xml)?;
    Ok(doc
        .root_element()
        .children()
        .filter(Node::is_element)
        .map(decode_tag)
        .collect())
}

/// Interpret a search response. The `available` attribute is decoded
/// first and is authoritative for the no-results signal; the record
/// list is then decoded in a second pass over the same payload.
pub fn decode_query_result(xml: &str) -> Result<TagQueryResult, TagError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let raw = root
        .attribute("available")
        .ok_or_else(|| TagError::Parse("missing available attribute".to_string()))?;
    let available: u32 = raw
        .trim()
        .parse()
        .map_err(|_| TagError::Parse(format!("available not an integer: {raw}")))?;

    if available == 0 {
        return Err(TagError::NoTagsFound);
    }

    let tags = decode_tag_list(xml)?;
    Ok(TagQueryResult { available, tags })
}
