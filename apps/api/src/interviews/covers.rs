use rand::seq::SliceRandom;

/// Company logos available as interview cover art.
pub const COVER_IMAGES: [&str; 12] = [
    "adobe.png",
    "amazon.png",
    "facebook.png",
    "hostinger.png",
    "pinterest.png",
    "quora.png",
    "reddit.png",
    "skype.png",
    "spotify.png",
    "telegram.png",
    "tiktok.png",
    "yahoo.png",
];

/// Picks a cover uniformly at random and joins it onto `base_url`.
pub fn random_cover(base_url: &str) -> String {
    let name = COVER_IMAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(COVER_IMAGES[0]);
    format!("{}/{}", base_url.trim_end_matches('/'), name)
}
