use maud::{html, Markup};

use crate::services::{ArtistShow, SearchHit, VenueShow};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

/// Which entity a search form, hit list or link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directory {
    Venues,
    Artists,
}

impl Directory {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Venues => "/venues",
            Self::Artists => "/artists",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Venues => "venues",
            Self::Artists => "artists",
        }
    }
}

pub fn search_bar(directory: Directory, search_term: &str) -> Markup {
    html! {
        form method="post" action=(format!("{}/search", directory.path()))
            class="bg-white rounded-lg shadow-sm p-4 mb-6 flex gap-4" {
            input
                type="search"
                name="search_term"
                value=(search_term)
                placeholder=(format!("Find {}...", directory.label()))
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";
            button
                type="submit"
                class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

pub fn genre_chips(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-3 py-1 text-sm font-semibold rounded-full bg-indigo-100 text-indigo-800" {
                    (genre)
                }
            }
        }
    }
}

pub fn seeking_badge(seeking: bool, looking_for: &str, description: Option<&str>) -> Markup {
    html! {
        @if seeking {
            div class="p-4 rounded-md bg-green-50 text-green-800" {
                p class="font-semibold" { "Currently seeking " (looking_for) }
                @if let Some(description) = description {
                    p class="mt-1" { (description) }
                }
            }
        } @else {
            div class="p-4 rounded-md bg-gray-50 text-gray-600" {
                "Not currently seeking " (looking_for)
            }
        }
    }
}

pub fn external_link(label: &str, url: Option<&str>) -> Markup {
    html! {
        @if let Some(url) = url {
            a href=(url) class="text-indigo-600 hover:underline" target="_blank" rel="noopener" { (label) }
        }
    }
}

/// Shows on a venue page, described by their artists.
pub fn artist_show_list(heading: &str, shows: &[ArtistShow]) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" {
                (shows.len()) " " (heading)
            }
            div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4" {
                @for show in shows {
                    a href=(format!("/artists/{}", show.artist_id))
                        class="bg-white rounded-lg shadow-md overflow-hidden flex" {
                        img
                            src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                            alt=(show.artist_name)
                            class="w-24 h-24 object-cover"
                            loading="lazy";
                        div class="p-4" {
                            h3 class="font-semibold text-gray-900" { (show.artist_name) }
                            p class="text-sm text-gray-600" { (show.start_time) }
                        }
                    }
                }
            }
        }
    }
}

/// Shows on an artist page, described by their venues.
pub fn venue_show_list(heading: &str, shows: &[VenueShow]) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" {
                (shows.len()) " " (heading)
            }
            div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4" {
                @for show in shows {
                    a href=(format!("/venues/{}", show.venue_id))
                        class="bg-white rounded-lg shadow-md overflow-hidden flex" {
                        img
                            src=(show.venue_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                            alt=(show.venue_name)
                            class="w-24 h-24 object-cover"
                            loading="lazy";
                        div class="p-4" {
                            h3 class="font-semibold text-gray-900" { (show.venue_name) }
                            p class="text-sm text-gray-600" { (show.start_time) }
                        }
                    }
                }
            }
        }
    }
}

pub fn hit_list(directory: Directory, hits: &[SearchHit]) -> Markup {
    html! {
        ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
            @for hit in hits {
                li class="p-4 flex justify-between" {
                    a href=(format!("{}/{}", directory.path(), hit.id))
                        class="font-semibold text-gray-900 hover:text-indigo-600" {
                        (hit.name)
                    }
                    span class="text-sm text-gray-500" {
                        (hit.num_upcoming_shows) " upcoming"
                    }
                }
            }
        }
    }
}

pub fn notification(message: &str, notification_type: &str) -> Markup {
    let (bg_color, text_color, icon) = match notification_type {
        "success" => ("bg-green-50", "text-green-800", "✓"),
        "error" => ("bg-red-50", "text-red-800", "✗"),
        "info" => ("bg-blue-50", "text-blue-800", "ℹ"),
        _ => ("bg-gray-50", "text-gray-800", "•"),
    };

    html! {
        div class={(format!("p-4 rounded-md {} {}", bg_color, text_color))} {
            div class="flex items-center" {
                span class="font-bold mr-2" { (icon) }
                span { (message) }
            }
        }
    }
}
