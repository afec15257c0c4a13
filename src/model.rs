//!
//! src/model.rs
//!
//! Domain types for tags returned from barbershoptags.com and the
//! value types nested inside them
//!

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::TagError;

/// All possible tonic notes a key can be written around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    CFlat,
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    ESharp,
    FFlat,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
    BSharp,
}

impl Note {
    pub fn wire(&self) -> &'static str {
        match self {
            Note::CFlat => "Cb",
            Note::C => "C",
            Note::CSharp => "C#",
            Note::DFlat => "Db",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::EFlat => "Eb",
            Note::E => "E",
            Note::ESharp => "E#",
            Note::FFlat => "Fb",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::GFlat => "Gb",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::AFlat => "Ab",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::BFlat => "Bb",
            Note::B => "B",
            Note::BSharp => "B#",
        }
    }

    pub fn from_wire(s: &str) -> Option<Note> {
        match s {
            "Cb" => Some(Note::CFlat),
            "C" => Some(Note::C),
            "C#" => Some(Note::CSharp),
            "Db" => Some(Note::DFlat),
            "D" => Some(Note::D),
            "D#" => Some(Note::DSharp),
            "Eb" => Some(Note::EFlat),
            "E" => Some(Note::E),
            "E#" => Some(Note::ESharp),
            "Fb" => Some(Note::FFlat),
            "F" => Some(Note::F),
            "F#" => Some(Note::FSharp),
            "Gb" => Some(Note::GFlat),
            "G" => Some(Note::G),
            "G#" => Some(Note::GSharp),
            "Ab" => Some(Note::AFlat),
            "A" => Some(Note::A),
            "A#" => Some(Note::ASharp),
            "Bb" => Some(Note::BFlat),
            "B" => Some(Note::B),
            "B#" => Some(Note::BSharp),
            _ => None,
        }
    }

    /// A string meant for display to users. Uses unicode characters for
    /// sharps and flats.
    pub fn pretty(&self) -> String {
        self.wire().replace('b', "\u{266d}").replace('#', "\u{266f}")
    }
}

/// All possible tonalities a key can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonality {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Tonality {
    pub fn wire(&self) -> &'static str {
        match self {
            Tonality::Major => "Major",
            Tonality::Minor => "Minor",
            Tonality::Dorian => "Dorian",
            Tonality::Phrygian => "Phrygian",
            Tonality::Lydian => "Lydian",
            Tonality::Mixolydian => "Mixolydian",
            Tonality::Aeolian => "Aeolian",
            Tonality::Locrian => "Locrian",
        }
    }

    pub fn from_wire(s: &str) -> Option<Tonality> {
        match s {
            "Major" => Some(Tonality::Major),
            "Minor" => Some(Tonality::Minor),
            "Dorian" => Some(Tonality::Dorian),
            "Phrygian" => Some(Tonality::Phrygian),
            "Lydian" => Some(Tonality::Lydian),
            "Mixolydian" => Some(Tonality::Mixolydian),
            "Aeolian" => Some(Tonality::Aeolian),
            "Locrian" => Some(Tonality::Locrian),
            _ => None,
        }
    }
}

/// The key a tag is written in: a tonic note plus a tonality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub note: Note,
    pub tonality: Tonality,
}

impl Key {
    pub fn new(note: Note, tonality: Tonality) -> Self {
        Self { note, tonality }
    }

    /// Parse the service's `"<Tonality>:<Note>"` form, e.g. `"Major:Bb"`.
    /// Exactly two non-empty components, each from the known vocabulary.
    pub fn parse(key_string: &str) -> Result<Key, TagError> {
        let mut components = key_string.split(':');
        let (Some(tonality), Some(note), None) =
            (components.next(), components.next(), components.next())
        else {
            return Err(TagError::InvalidKey(key_string.to_string()));
        };
        match (Tonality::from_wire(tonality), Note::from_wire(note)) {
            (Some(tonality), Some(note)) => Ok(Key { note, tonality }),
            _ => Err(TagError::InvalidKey(key_string.to_string())),
        }
    }

    /// The wire form, `"Major:Bb"`.
    pub fn wire(&self) -> String {
        format!("{}:{}", self.tonality.wire(), self.note.wire())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.note.pretty(), self.tonality.wire())
    }
}

/// What voices a tag is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoicingType {
    /// Traditional male barbershop arrangement (tenor, lead, bari, bass)
    Barbershop,
    /// Traditional female barbershop arrangement (tenor, lead, bari, bass)
    FemaleBarbershop,
    /// Traditional mixed choir arrangement (soprano, alto, tenor, bass)
    Satb,
    OtherMale,
    OtherFemale,
    Mixed,
}

impl VoicingType {
    /// The long form the service puts in record elements.
    pub fn wire(&self) -> &'static str {
        match self {
            VoicingType::Barbershop => "Barbershop",
            VoicingType::FemaleBarbershop => "Female Barbershop (incl. SAI, HI, etc)",
            VoicingType::Satb => "SATB",
            VoicingType::OtherMale => "Other male",
            VoicingType::OtherFemale => "Other female",
            VoicingType::Mixed => "Other mixed",
        }
    }

    pub fn from_wire(s: &str) -> Option<VoicingType> {
        match s {
            "Barbershop" => Some(VoicingType::Barbershop),
            "Female Barbershop (incl. SAI, HI, etc)" => Some(VoicingType::FemaleBarbershop),
            "SATB" => Some(VoicingType::Satb),
            "Other male" => Some(VoicingType::OtherMale),
            "Other female" => Some(VoicingType::OtherFemale),
            "Other mixed" => Some(VoicingType::Mixed),
            _ => None,
        }
    }

    /// The short code the search endpoint filters on.
    pub fn query_code(&self) -> &'static str {
        match self {
            VoicingType::Barbershop => "bbs",
            VoicingType::FemaleBarbershop => "sai",
            VoicingType::Satb => "satb",
            VoicingType::OtherMale => "male",
            VoicingType::OtherFemale => "female",
            VoicingType::Mixed => "mixed",
        }
    }
}

/// What curated collection a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// David Wright's "Classic Tags"
    Classic,
    /// The "Easy Tags" collection
    EasyTags,
    /// The "100 Days: 100 Tags" collection
    OneHundred,
    /// No collection; the service encodes this as the empty token
    Unaffiliated,
}

impl Collection {
    pub fn wire(&self) -> &'static str {
        match self {
            Collection::Classic => "classic",
            Collection::EasyTags => "easytags",
            Collection::OneHundred => "100",
            Collection::Unaffiliated => "",
        }
    }

    pub fn from_wire(s: &str) -> Option<Collection> {
        match s {
            "classic" => Some(Collection::Classic),
            "easytags" => Some(Collection::EasyTags),
            "100" => Some(Collection::OneHundred),
            "" => Some(Collection::Unaffiliated),
            _ => None,
        }
    }

    /// A human readable title for each collection
    pub fn pretty(&self) -> &'static str {
        match self {
            Collection::Classic => "Classic Tags",
            Collection::EasyTags => "Easy Tags",
            Collection::OneHundred => "100 Days: 100 Tags",
            Collection::Unaffiliated => "",
        }
    }
}

/// How the learning tracks for a tag were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordingMethod {
    /// The featured part in one channel, the other parts in the other
    Stereo,
    /// The featured part louder, the other parts quieter
    PartPredominant,
    /// The featured part alone
    SinglePart,
}

impl RecordingMethod {
    pub fn wire(&self) -> &'static str {
        match self {
            RecordingMethod::Stereo => {
                "stereo - one part on one side, the other parts on the other side"
            }
            RecordingMethod::PartPredominant => {
                "part predominant - one part louder, other parts quieter"
            }
            RecordingMethod::SinglePart => "single part only",
        }
    }

    pub fn from_wire(s: &str) -> Option<RecordingMethod> {
        match s {
            "stereo - one part on one side, the other parts on the other side" => {
                Some(RecordingMethod::Stereo)
            }
            "part predominant - one part louder, other parts quieter" => {
                Some(RecordingMethod::PartPredominant)
            }
            "single part only" => Some(RecordingMethod::SinglePart),
            _ => None,
        }
    }
}

/// The declared format of a remote file, mapped from the filename
/// extension the service reports. Unknown extensions are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFormat {
    Pdf,
    Mp3,
    Wav,
    M4a,
    Midi,
    Finale,
    FinaleX,
    MusicXml,
    CompressedMusicXml,
    Other(String),
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> FileFormat {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => FileFormat::Pdf,
            "mp3" => FileFormat::Mp3,
            "wav" => FileFormat::Wav,
            "m4a" => FileFormat::M4a,
            "mid" | "midi" => FileFormat::Midi,
            "mus" => FileFormat::Finale,
            "musx" => FileFormat::FinaleX,
            "xml" | "musicxml" => FileFormat::MusicXml,
            "mxl" => FileFormat::CompressedMusicXml,
            _ => FileFormat::Other(ext.to_string()),
        }
    }

    pub fn extension(&self) -> &str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Mp3 => "mp3",
            FileFormat::Wav => "wav",
            FileFormat::M4a => "m4a",
            FileFormat::Midi => "mid",
            FileFormat::Finale => "mus",
            FileFormat::FinaleX => "musx",
            FileFormat::MusicXml => "xml",
            FileFormat::CompressedMusicXml => "mxl",
            FileFormat::Other(ext) => ext,
        }
    }
}

/// A downloadable asset belonging to a tag. The URL is always present;
/// the payload is only populated by an explicit fetch and transitions
/// unset -> set exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    pub url: Url,
    pub format: Option<FileFormat>,
    pub data: Option<Vec<u8>>,
}

impl RemoteFile {
    pub fn new(url: Url, format: Option<FileFormat>) -> Self {
        Self {
            url,
            format,
            data: None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        self.data.is_some()
    }
}

/// A performance video belonging to a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagVideo {
    pub id: i64,
    pub posted: NaiveDate,
    pub description: Option<String>,
    /// The key the video was sung in
    pub sung_key: Option<Key>,
    /// Whether all parts were recorded in a single take
    pub multitrack: bool,
    pub youtube_id: Option<String>,
    pub facebook_url: Option<Url>,
    /// Name of the singer or quartet in the video
    pub author: Option<String>,
    pub author_website: Option<Url>,
}

impl TagVideo {
    /// The playback URL. A YouTube id takes precedence over a direct
    /// Facebook link.
    pub fn video_url(&self) -> Option<Url> {
        if let Some(code) = &self.youtube_id {
            return Url::parse(&format!("https://youtube.com/watch?v={code}")).ok();
        }
        self.facebook_url.clone()
    }
}

/// The record fields the service knows, by wire name. Doubles as the
/// vocabulary for the `fldlist` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Id,
    Title,
    AltTitle,
    Version,
    Key,
    Parts,
    VoicingType,
    RecordingMethod,
    LearningVideoYouTubeId,
    Notes,
    Arranger,
    ArrangerWebsite,
    SungBy,
    SungWebsite,
    SungYear,
    LearningTrackArtist,
    LearningTrackArtistWebsite,
    Teacher,
    TeacherWebsite,
    Provider,
    ProviderWebsite,
    Posted,
    ClassicIndex,
    Collection,
    Rating,
    RatingCount,
    Downloaded,
    Stamp,
    SheetMusic,
    NotationFile,
    AllPartsTrack,
    Lyrics,
    TenorLearningTrack,
    LeadLearningTrack,
    BariLearningTrack,
    BassLearningTrack,
    Other1LearningTrack,
    Other2LearningTrack,
    Other3LearningTrack,
    Other4LearningTrack,
    Videos,
}

impl Field {
    /// Every learning-track field, in service order.
    pub const LEARNING_TRACKS: [Field; 9] = [
        Field::AllPartsTrack,
        Field::TenorLearningTrack,
        Field::LeadLearningTrack,
        Field::BariLearningTrack,
        Field::BassLearningTrack,
        Field::Other1LearningTrack,
        Field::Other2LearningTrack,
        Field::Other3LearningTrack,
        Field::Other4LearningTrack,
    ];

    pub fn wire(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::AltTitle => "altTitle",
            Field::Version => "version",
            Field::Key => "writKey",
            Field::Parts => "parts",
            Field::VoicingType => "type",
            Field::RecordingMethod => "recording",
            Field::LearningVideoYouTubeId => "teachVid",
            Field::Notes => "notes",
            Field::Arranger => "arranger",
            Field::ArrangerWebsite => "arrWebsite",
            Field::SungBy => "sungBy",
            Field::SungWebsite => "sungWebsite",
            Field::SungYear => "sungYear",
            Field::LearningTrackArtist => "quartet",
            Field::LearningTrackArtistWebsite => "qWebsite",
            Field::Teacher => "teacher",
            Field::TeacherWebsite => "tWebsite",
            Field::Provider => "provider",
            Field::ProviderWebsite => "provWebsite",
            Field::Posted => "posted",
            Field::ClassicIndex => "classic",
            Field::Collection => "collection",
            Field::Rating => "rating",
            Field::RatingCount => "ratingCount",
            Field::Downloaded => "downloaded",
            Field::Stamp => "stamp",
            Field::SheetMusic => "sheetMusic",
            Field::NotationFile => "notation",
            Field::AllPartsTrack => "allParts",
            Field::Lyrics => "lyrics",
            Field::TenorLearningTrack => "tenor",
            Field::LeadLearningTrack => "lead",
            Field::BariLearningTrack => "bari",
            Field::BassLearningTrack => "bass",
            Field::Other1LearningTrack => "other1",
            Field::Other2LearningTrack => "other2",
            Field::Other3LearningTrack => "other3",
            Field::Other4LearningTrack => "other4",
            Field::Videos => "videos",
        }
    }
}

/// A catalog record describing a single arrangement entry on
/// barbershoptags.com.
///
/// Required fields degrade to documented defaults when the source omits
/// or mangles them; optional fields are simply absent. Equality and
/// hashing are by `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub title: String,
    pub voicing_type: VoicingType,
    pub posted: NaiveDate,
    /// The average 5-star rating as a decimal
    pub rating: f64,
    pub rating_count: u32,
    pub downloaded: u32,
    /// When the tag was last updated
    pub stamp: NaiveDateTime,

    pub alt_title: Option<String>,
    /// The version of the tag (i.e. as performed by)
    pub version: Option<String>,
    pub key: Option<Key>,
    /// Part count; `u32::MAX` when the service reports "other"
    pub parts: Option<u32>,
    pub recording_method: Option<RecordingMethod>,
    /// The service stores only the YouTube video id, see
    /// [`Tag::learning_video_url`] for the full link
    pub learning_video_youtube_id: Option<String>,
    pub notes: Option<String>,
    pub arranger: Option<String>,
    pub arranger_website: Option<Url>,
    /// The artist that made the tag famous
    pub sung_by: Option<String>,
    pub sung_website: Option<Url>,
    pub sung_year: Option<NaiveDate>,
    /// The quartet or person that sung the learning tracks
    pub learning_track_artist: Option<String>,
    pub learning_track_artist_website: Option<Url>,
    pub teacher: Option<String>,
    pub teacher_website: Option<Url>,
    /// The person that provided the tag or learning tracks
    pub provider: Option<String>,
    pub provider_website: Option<Url>,
    /// Position within David Wright's "Classic Tags" booklet
    pub classic_index: Option<u32>,
    pub collection: Option<Collection>,
    pub sheet_music: Option<RemoteFile>,
    pub notation_file: Option<RemoteFile>,
    /// All parts sung together, untampered with
    pub all_parts_track: Option<RemoteFile>,
    pub lyrics: Option<String>,
    pub tenor_learning_track: Option<RemoteFile>,
    pub lead_learning_track: Option<RemoteFile>,
    pub bari_learning_track: Option<RemoteFile>,
    pub bass_learning_track: Option<RemoteFile>,
    pub other1_learning_track: Option<RemoteFile>,
    pub other2_learning_track: Option<RemoteFile>,
    pub other3_learning_track: Option<RemoteFile>,
    pub other4_learning_track: Option<RemoteFile>,
    pub videos: Option<Vec<TagVideo>>,
}

impl Default for Tag {
    fn default() -> Self {
        Self {
            id: -1,
            title: String::new(),
            voicing_type: VoicingType::Barbershop,
            posted: NaiveDate::MIN,
            rating: -1.0,
            rating_count: 0,
            downloaded: 0,
            stamp: NaiveDateTime::MIN,
            alt_title: None,
            version: None,
            key: None,
            parts: None,
            recording_method: None,
            learning_video_youtube_id: None,
            notes: None,
            arranger: None,
            arranger_website: None,
            sung_by: None,
            sung_website: None,
            sung_year: None,
            learning_track_artist: None,
            learning_track_artist_website: None,
            teacher: None,
            teacher_website: None,
            provider: None,
            provider_website: None,
            classic_index: None,
            collection: None,
            sheet_music: None,
            notation_file: None,
            all_parts_track: None,
            lyrics: None,
            tenor_learning_track: None,
            lead_learning_track: None,
            bari_learning_track: None,
            bass_learning_track: None,
            other1_learning_track: None,
            other2_learning_track: None,
            other3_learning_track: None,
            other4_learning_track: None,
            videos: None,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Tag {
    /// A YouTube link to the learning video, when the service reported a
    /// video id.
    pub fn learning_video_url(&self) -> Option<Url> {
        let code = self.learning_video_youtube_id.as_deref()?;
        Url::parse(&format!("https://youtube.com/watch?v={code}")).ok()
    }

    /// Every learning track present on this tag, keyed by its field.
    pub fn learning_tracks(&self) -> Vec<(Field, &RemoteFile)> {
        let slots = [
            (Field::AllPartsTrack, &self.all_parts_track),
            (Field::TenorLearningTrack, &self.tenor_learning_track),
            (Field::LeadLearningTrack, &self.lead_learning_track),
            (Field::BariLearningTrack, &self.bari_learning_track),
            (Field::BassLearningTrack, &self.bass_learning_track),
            (Field::Other1LearningTrack, &self.other1_learning_track),
            (Field::Other2LearningTrack, &self.other2_learning_track),
            (Field::Other3LearningTrack, &self.other3_learning_track),
            (Field::Other4LearningTrack, &self.other4_learning_track),
        ];
        slots
            .into_iter()
            .filter_map(|(field, slot)| slot.as_ref().map(|file| (field, file)))
            .collect()
    }

    /// A fully-populated fixture value for previews and tests.
    pub fn fixture() -> Tag {
        let site = Url::parse("https://www.rickastley.co.uk/").unwrap();
        let track = |name: &str, format: FileFormat| {
            RemoteFile::new(
                Url::parse(&format!("https://www.barbershoptags.com/dbaction.php?File={name}"))
                    .unwrap(),
                Some(format),
            )
        };
        Tag {
            id: 42069,
            title: "Never Gonna Give You Up".to_string(),
            voicing_type: VoicingType::Barbershop,
            posted: NaiveDate::from_ymd_opt(2069, 4, 20).unwrap(),
            rating: 4.2,
            rating_count: 690,
            downloaded: 4200,
            stamp: NaiveDate::from_ymd_opt(2069, 4, 20)
                .unwrap()
                .and_hms_opt(16, 20, 0)
                .unwrap(),
            alt_title: Some("Rick Roll".to_string()),
            version: Some("Funny Meme version".to_string()),
            key: Some(Key::new(Note::BFlat, Tonality::Major)),
            parts: Some(4),
            recording_method: Some(RecordingMethod::Stereo),
            learning_video_youtube_id: Some("YE7VzlLtp-4".to_string()),
            notes: Some("This is that funny meme song.".to_string()),
            arranger: Some("Rick Astley".to_string()),
            arranger_website: Some(site.clone()),
            sung_by: Some("Rick Astley".to_string()),
            sung_website: Some(site.clone()),
            sung_year: Some(NaiveDate::from_ymd_opt(2069, 1, 1).unwrap()),
            learning_track_artist: Some("Rick Astley".to_string()),
            learning_track_artist_website: Some(site.clone()),
            teacher: Some("Rick Astley".to_string()),
            teacher_website: Some(site.clone()),
            provider: Some("Rick Astley".to_string()),
            provider_website: Some(site),
            classic_index: Some(420),
            collection: Some(Collection::Classic),
            sheet_music: Some(track("42069.pdf", FileFormat::Pdf)),
            notation_file: Some(track("42069.mus", FileFormat::Finale)),
            all_parts_track: Some(track("42069-all.mp3", FileFormat::Mp3)),
            lyrics: Some(
                "Never gonna give you up,\nNever gonna let you down".to_string(),
            ),
            tenor_learning_track: Some(track("42069-tenor.mp3", FileFormat::Mp3)),
            lead_learning_track: Some(track("42069-lead.mp3", FileFormat::Mp3)),
            bari_learning_track: Some(track("42069-bari.mp3", FileFormat::Mp3)),
            bass_learning_track: Some(track("42069-bass.mp3", FileFormat::Mp3)),
            other1_learning_track: Some(track("42069-other1.mp3", FileFormat::Mp3)),
            other2_learning_track: Some(track("42069-other2.mp3", FileFormat::Mp3)),
            other3_learning_track: Some(track("42069-other3.wav", FileFormat::Wav)),
            other4_learning_track: Some(track("42069-other4.m4a", FileFormat::M4a)),
            videos: Some(vec![
                TagVideo {
                    id: 1001,
                    posted: NaiveDate::from_ymd_opt(2069, 4, 21).unwrap(),
                    description: Some("Live at the meme convention".to_string()),
                    sung_key: Some(Key::new(Note::BFlat, Tonality::Major)),
                    multitrack: true,
                    youtube_id: Some("dQw4w9WgXcQ".to_string()),
                    facebook_url: None,
                    author: Some("Rick Astley".to_string()),
                    author_website: Some(
                        Url::parse("https://www.rickastley.co.uk/").unwrap(),
                    ),
                },
                TagVideo {
                    id: 1002,
                    posted: NaiveDate::from_ymd_opt(2069, 5, 2).unwrap(),
                    description: None,
                    sung_key: None,
                    multitrack: false,
                    youtube_id: None,
                    facebook_url: Some(
                        Url::parse("https://www.facebook.com/watch/?v=1002").unwrap(),
                    ),
                    author: None,
                    author_website: None,
                },
            ]),
        }
    }
}

/// The envelope a search response carries: how many tags matched in
/// total, and the page of records actually returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagQueryResult {
    pub available: u32,
    pub tags: Vec<Tag>,
}
