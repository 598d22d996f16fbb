use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    artist_show_list, external_link, genre_chips, hit_list, notification, search_bar,
    seeking_badge, venue_show_list, Directory,
};
use super::layout::base_layout;
use crate::db::entities::artist;
use crate::services::{Area, ArtistDetail, SearchResults, ShowListing, VenueDetail};

pub fn home_page() -> Markup {
    base_layout(
        "Home",
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Booking Directory" }
                p class="text-gray-600 text-lg mb-8" {
                    "Find venues, discover artists, and book the shows in between."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues/create" class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-md" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-md" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="px-4 py-2 bg-gray-200 hover:bg-gray-300 text-gray-700 font-semibold rounded-md" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[Area]) -> Markup {
    base_layout(
        "Venues",
        html! {
            div class="mb-8 flex justify-between items-center" {
                h1 class="text-3xl font-bold text-gray-900" { "Venues" }
                a href="/venues/create" class="text-indigo-600 hover:underline" { "Post a venue" }
            }

            (search_bar(Directory::Venues, ""))

            @if areas.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No venues listed yet." }
                }
            }

            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-900 mb-2" {
                        (area.city) ", " (area.state)
                    }
                    ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
                        @for venue in &area.venues {
                            li class="p-4 flex justify-between" {
                                a href=(format!("/venues/{}", venue.id))
                                    class="font-semibold text-gray-900 hover:text-indigo-600" {
                                    (venue.name)
                                }
                                span class="text-sm text-gray-500" {
                                    (venue.num_upcoming_shows) " upcoming"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetail) -> Markup {
    base_layout(
        &venue.name,
        html! {
            div class="mb-6" {
                a href="/venues" class="text-indigo-600 hover:underline" { "← Back to Venues" }
            }

            div class="bg-white rounded-lg shadow-sm p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &venue.image_link {
                        img src=(image) alt=(venue.name) class="w-full md:w-64 rounded-lg shadow-md";
                    }
                    div class="flex-grow space-y-3" {
                        div class="flex justify-between items-start" {
                            div {
                                h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                                p class="text-sm text-gray-500" { "ID: " (venue.id) }
                            }
                            div class="flex gap-2" {
                                a href=(format!("/venues/{}/edit", venue.id))
                                    class="px-3 py-1 bg-gray-200 hover:bg-gray-300 rounded-md text-sm" {
                                    "Edit"
                                }
                                button
                                    type="button"
                                    class="px-3 py-1 bg-red-600 hover:bg-red-700 text-white rounded-md text-sm"
                                    data-venue-id=(venue.id)
                                    onclick="fetch('/venues/' + this.dataset.venueId, { method: 'DELETE' }).then(function () { window.location = '/'; })" {
                                    "Delete"
                                }
                            }
                        }
                        (genre_chips(&venue.genres))
                        p class="text-gray-700" { (venue.address) }
                        p class="text-gray-700" { (venue.city) ", " (venue.state) }
                        p class="text-gray-700" { (venue.phone) }
                        div class="flex gap-4" {
                            (external_link("Website", venue.website.as_deref()))
                            (external_link("Facebook", venue.facebook_link.as_deref()))
                        }
                        (seeking_badge(venue.seeking_talent, "talent", venue.seeking_description.as_deref()))
                    }
                }
            }

            (artist_show_list("Upcoming Shows", &venue.upcoming_shows))
            (artist_show_list("Past Shows", &venue.past_shows))
        },
    )
}

pub fn artists_page(artists: &[artist::Model]) -> Markup {
    base_layout(
        "Artists",
        html! {
            div class="mb-8 flex justify-between items-center" {
                h1 class="text-3xl font-bold text-gray-900" { "Artists" }
                a href="/artists/create" class="text-indigo-600 hover:underline" { "Post an artist" }
            }

            (search_bar(Directory::Artists, ""))

            @if artists.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No artists listed yet." }
                }
            } @else {
                ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
                    @for artist in artists {
                        li class="p-4" {
                            a href=(format!("/artists/{}", artist.id))
                                class="font-semibold text-gray-900 hover:text-indigo-600" {
                                (artist.name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetail) -> Markup {
    base_layout(
        &artist.name,
        html! {
            div class="mb-6" {
                a href="/artists" class="text-indigo-600 hover:underline" { "← Back to Artists" }
            }

            div class="bg-white rounded-lg shadow-sm p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &artist.image_link {
                        img src=(image) alt=(artist.name) class="w-full md:w-64 rounded-lg shadow-md";
                    }
                    div class="flex-grow space-y-3" {
                        div class="flex justify-between items-start" {
                            div {
                                h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                                p class="text-sm text-gray-500" { "ID: " (artist.id) }
                            }
                            a href=(format!("/artists/{}/edit", artist.id))
                                class="px-3 py-1 bg-gray-200 hover:bg-gray-300 rounded-md text-sm" {
                                "Edit"
                            }
                        }
                        (genre_chips(&artist.genres))
                        p class="text-gray-700" { (artist.city) ", " (artist.state) }
                        p class="text-gray-700" { (artist.phone) }
                        div class="flex gap-4" {
                            (external_link("Website", artist.website.as_deref()))
                            (external_link("Facebook", artist.facebook_link.as_deref()))
                        }
                        (seeking_badge(artist.seeking_venue, "performance venues", artist.seeking_description.as_deref()))
                    }
                }
            }

            (venue_show_list("Upcoming Shows", &artist.upcoming_shows))
            (venue_show_list("Past Shows", &artist.past_shows))
        },
    )
}

pub fn search_results_page(directory: Directory, results: &SearchResults) -> Markup {
    base_layout(
        "Search",
        html! {
            (search_bar(directory, &results.search_term))

            h1 class="text-2xl font-bold text-gray-900 mb-4" {
                "Number of search results for \"" (results.search_term) "\": " (results.count)
            }

            @if results.data.is_empty() {
                (notification(&format!("No {} matched your search.", directory.label()), "info"))
            } @else {
                (hit_list(directory, &results.data))
            }
        },
    )
}

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            div class="mb-8 flex justify-between items-center" {
                h1 class="text-3xl font-bold text-gray-900" { "Shows" }
                a href="/shows/create" class="text-indigo-600 hover:underline" { "Post a show" }
            }

            @if shows.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No shows listed yet." }
                }
            } @else {
                div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4" {
                    @for show in shows {
                        div class="bg-white rounded-lg shadow-md overflow-hidden" {
                            @if let Some(image) = &show.artist_image_link {
                                img src=(image) alt=(show.artist_name) class="w-full h-48 object-cover" loading="lazy";
                            }
                            div class="p-4" {
                                p class="text-sm text-gray-500" { (show.start_time) }
                                a href=(format!("/artists/{}", show.artist_id))
                                    class="block font-semibold text-gray-900 hover:text-indigo-600" {
                                    (show.artist_name)
                                }
                                p class="text-sm text-gray-600" {
                                    "playing at "
                                    a href=(format!("/venues/{}", show.venue_id)) class="hover:text-indigo-600" {
                                        (show.venue_name)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str, details: Option<&str>) -> Markup {
    let heading = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::UNPROCESSABLE_ENTITY => "Could not save",
        _ => "Something went wrong",
    };

    base_layout(
        heading,
        html! {
            div class="max-w-2xl mx-auto text-center py-12 space-y-4" {
                p class="text-6xl font-bold text-gray-300" { (status.as_u16()) }
                h1 class="text-3xl font-bold text-gray-900" { (heading) }
                (notification(message, "error"))
                @if let Some(details) = details {
                    p class="text-gray-600" { (details) }
                }
                a href="/" class="text-indigo-600 hover:underline" { "Back home" }
            }
        },
    )
}
