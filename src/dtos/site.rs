//! Site DTOs - Public wedding document, SEO metadata, countdown and RSVP status

use crate::date_utils::TimeLeft;
use crate::entities::{
    Couple, FaqQuestion, GalleryImage, LoveStoryEvent, NavigationLink, RegistryConfig,
    WeddingConfig, WeddingDetails, WeddingParty, WebsiteConfig,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// The part of the RSVP configuration that views may see
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicRsvpDTO {
    pub google_sheet_url: String,
    pub max_guest_count: u32,
}

/// Wedding document with the form endpoint, script endpoint and field ids left out
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicWeddingDTO {
    pub couple: Couple,
    pub wedding_details: WeddingDetails,
    pub rsvp_config: PublicRsvpDTO,
    pub registry_config: RegistryConfig,
    pub love_story_events: Vec<LoveStoryEvent>,
    pub wedding_party: WeddingParty,
    pub faq_questions: Vec<FaqQuestion>,
    pub website_config: WebsiteConfig,
    pub gallery_images: Vec<GalleryImage>,
    pub navigation_links: Vec<NavigationLink>,
}

impl From<&WeddingConfig> for PublicWeddingDTO {
    fn from(value: &WeddingConfig) -> Self {
        Self {
            couple: value.couple.clone(),
            wedding_details: value.wedding_details.clone(),
            rsvp_config: PublicRsvpDTO {
                google_sheet_url: value.rsvp_config.google_sheet_url.clone(),
                max_guest_count: value.rsvp_config.max_guest_count,
            },
            registry_config: value.registry_config.clone(),
            love_story_events: value.love_story_events.clone(),
            wedding_party: value.wedding_party.clone(),
            faq_questions: value.faq_questions.clone(),
            website_config: value.website_config.clone(),
            gallery_images: value.gallery_images.clone(),
            navigation_links: value.navigation_links.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenGraphImageDTO {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphDTO {
    pub title: String,
    pub description: String,
    pub images: Vec<OpenGraphImageDTO>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDTO {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraphDTO,
}

impl From<&WeddingConfig> for MetadataDTO {
    fn from(value: &WeddingConfig) -> Self {
        let website = &value.website_config;
        Self {
            title: website.title.clone(),
            description: website.description.clone(),
            open_graph: OpenGraphDTO {
                title: website.title.clone(),
                description: website.description.clone(),
                images: vec![OpenGraphImageDTO {
                    url: website.og_image.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: format!("{} Wedding", value.couple.couple_name_display),
                }],
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountdownDTO {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub wedding_passed: bool,
}

impl From<TimeLeft> for CountdownDTO {
    fn from(value: TimeLeft) -> Self {
        Self {
            days: value.days,
            hours: value.hours,
            minutes: value.minutes,
            seconds: value.seconds,
            wedding_passed: value.is_zero(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStatusDTO {
    pub deadline: NaiveDate,
    pub deadline_display: String,
    pub deadline_passed: bool,
    pub remaining_time: String,
    pub max_guest_count: u32,
    pub sheet_url: String,
}
