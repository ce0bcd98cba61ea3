//! Wedding configuration - Read-only document consumed by every view

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeddingConfig {
    pub couple: Couple,
    pub wedding_details: WeddingDetails,
    pub rsvp_config: RsvpConfig,
    pub registry_config: RegistryConfig,
    #[serde(default)]
    pub love_story_events: Vec<LoveStoryEvent>,
    pub wedding_party: WeddingParty,
    #[serde(default)]
    pub faq_questions: Vec<FaqQuestion>,
    pub website_config: WebsiteConfig,
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
    #[serde(default)]
    pub navigation_links: Vec<NavigationLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub image: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Couple {
    pub partner1: Partner,
    pub partner2: Partner,
    pub couple_name_display: String,
    pub couple_full_name_display: String,
    pub couple_name_possessive: String,
    pub hashtag: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub google_maps_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventSchedule {
    pub start_time: String,
    pub start_time_display: String,
    pub end_time: String,
    pub end_time_display: String,
    pub venue: Venue,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeddingDetails {
    /// Local wall-clock time of the ceremony
    pub date: NaiveDateTime,
    pub date_display: String,
    pub time_display: String,
    pub rsvp_deadline: NaiveDate,
    pub rsvp_deadline_display: String,
    pub ceremony: EventSchedule,
    pub reception: EventSchedule,
    pub dress_code: String,
    pub dress_code_description: String,
    #[serde(default)]
    pub additional_info: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub guest_count: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RsvpConfig {
    /// Form-processing endpoint that receives submissions
    pub google_form_url: String,
    /// Human-readable published sheet
    pub google_sheet_url: String,
    /// Script endpoint returning the sheet rows as JSON
    pub google_script_url: String,
    pub form_fields: FormFields,
    pub max_guest_count: u32,
    pub storage_key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub name: String,
    pub logo: String,
    pub account_name: String,
    pub account_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    pub message: String,
    #[serde(default)]
    pub payment_options: Vec<PaymentOption>,
    pub thank_you_message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoveStoryEvent {
    pub date: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PartyMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeddingParty {
    #[serde(default)]
    pub bride_party: Vec<PartyMember>,
    #[serde(default)]
    pub groom_party: Vec<PartyMember>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FaqQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    pub title: String,
    pub description: String,
    pub og_image: String,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub contact_email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GallerySpan {
    None,
    Row,
    Col,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub span: GallerySpan,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NavigationLink {
    pub name: String,
    pub href: String,
}
