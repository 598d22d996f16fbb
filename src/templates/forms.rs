use maud::{html, Markup};

use super::layout::base_layout;
use crate::db::entities::{artist, venue};

/// Choices offered by the genre picker. The server accepts any tag.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";

fn text_field(name: &str, label: &str, value: Option<&str>, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            input type="text" id=(name) name=(name) value=(value.unwrap_or_default())
                required[required] class=(INPUT_CLASS);
        }
    }
}

fn genre_field(selected: &[String]) -> Markup {
    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-2" { "Genres" }
            select id="genres" name="genres" multiple class=(INPUT_CLASS) {
                @for choice in GENRE_CHOICES {
                    option value=(choice) selected[selected.iter().any(|g| g == choice)] { (choice) }
                }
                // Keep tags that are not among the stock choices
                @for genre in selected.iter().filter(|g| !GENRE_CHOICES.contains(&g.as_str())) {
                    option value=(genre) selected { (genre) }
                }
            }
        }
    }
}

fn seeking_field(name: &str, label: &str, seeking: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" { (label) }
            select id=(name) name=(name) class=(INPUT_CLASS) {
                option value="True" selected[seeking] { "Yes" }
                option value="False" selected[!seeking] { "No" }
            }
        }
    }
}

fn form_shell(title: &str, action: &str, submit: &str, fields: Markup) -> Markup {
    base_layout(
        title,
        html! {
            div class="max-w-3xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (title) }
                form method="post" action=(action) class="bg-white rounded-lg shadow-sm p-6 space-y-4" {
                    (fields)
                    button type="submit"
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-md" {
                        (submit)
                    }
                }
            }
        },
    )
}

/// Create form when `venue` is `None`, pre-populated edit form otherwise.
pub fn venue_form_page(venue: Option<&venue::Model>, genres: &[String]) -> Markup {
    let (title, action, submit) = match venue {
        Some(v) => (format!("Edit {}", v.name), format!("/venues/{}/edit", v.id), "Save Venue"),
        None => ("List a new venue".to_string(), "/venues/create".to_string(), "Create Venue"),
    };

    let fields = html! {
        (text_field("name", "Name", venue.map(|v| v.name.as_str()), true))
        div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
            (text_field("city", "City", venue.map(|v| v.city.as_str()), true))
            (text_field("state", "State", venue.map(|v| v.state.as_str()), true))
        }
        (text_field("address", "Address", venue.map(|v| v.address.as_str()), true))
        (text_field("phone", "Phone", venue.map(|v| v.phone.as_str()), true))
        (genre_field(genres))
        (text_field("image_link", "Image link", venue.and_then(|v| v.image_link.as_deref()), false))
        (text_field("facebook_link", "Facebook link", venue.and_then(|v| v.facebook_link.as_deref()), false))
        (text_field("website", "Website", venue.and_then(|v| v.website.as_deref()), false))
        (seeking_field("seeking_talent", "Looking for talent?", venue.map(|v| v.seeking_talent).unwrap_or(false)))
        (text_field("seeking_description", "Seeking description", venue.and_then(|v| v.seeking_description.as_deref()), false))
    };

    form_shell(&title, &action, submit, fields)
}

pub fn artist_form_page(artist: Option<&artist::Model>, genres: &[String]) -> Markup {
    let (title, action, submit) = match artist {
        Some(a) => (format!("Edit {}", a.name), format!("/artists/{}/edit", a.id), "Save Artist"),
        None => ("List a new artist".to_string(), "/artists/create".to_string(), "Create Artist"),
    };

    let fields = html! {
        (text_field("name", "Name", artist.map(|a| a.name.as_str()), true))
        div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
            (text_field("city", "City", artist.map(|a| a.city.as_str()), true))
            (text_field("state", "State", artist.map(|a| a.state.as_str()), true))
        }
        (text_field("phone", "Phone", artist.map(|a| a.phone.as_str()), true))
        (genre_field(genres))
        (text_field("image_link", "Image link", artist.and_then(|a| a.image_link.as_deref()), false))
        (text_field("facebook_link", "Facebook link", artist.and_then(|a| a.facebook_link.as_deref()), false))
        (text_field("website", "Website", artist.and_then(|a| a.website.as_deref()), false))
        (seeking_field("seeking_venue", "Looking for venues?", artist.map(|a| a.seeking_venue).unwrap_or(false)))
        (text_field("seeking_description", "Seeking description", artist.and_then(|a| a.seeking_description.as_deref()), false))
    };

    form_shell(&title, &action, submit, fields)
}

pub fn show_form_page(venues: &[venue::Model], artists: &[artist::Model]) -> Markup {
    let fields = html! {
        div {
            label for="venue_id" class="block text-sm font-medium text-gray-700 mb-2" { "Venue" }
            select id="venue_id" name="venue_id" required class=(INPUT_CLASS) {
                @for venue in venues {
                    option value=(venue.id) { (venue.name) " (" (venue.city) ", " (venue.state) ")" }
                }
            }
        }
        div {
            label for="artist_id" class="block text-sm font-medium text-gray-700 mb-2" { "Artist" }
            select id="artist_id" name="artist_id" required class=(INPUT_CLASS) {
                @for artist in artists {
                    option value=(artist.id) { (artist.name) }
                }
            }
        }
        div {
            label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" { "Start time" }
            input type="datetime-local" id="start_time" name="start_time" step="1" required class=(INPUT_CLASS);
        }
    };

    form_shell("List a new show", "/shows/create", "Create Show", fields)
}
