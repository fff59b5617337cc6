use chrono::Local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub content: &'static str,
    pub author: &'static str,
}

const fn quote(content: &'static str, author: &'static str) -> Quote {
    Quote { content, author }
}

pub const QUOTES: &[Quote] = &[
    quote("The secret of getting ahead is getting started.", "Mark Twain"),
    quote("Well begun is half done.", "Aristotle"),
    quote("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    quote("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    quote("Energy and persistence conquer all things.", "Benjamin Franklin"),
    quote(
        "Our greatest glory is not in never falling, but in rising every time we fall.",
        "Confucius",
    ),
    quote("Well done is better than well said.", "Benjamin Franklin"),
    quote("You will never win if you never begin.", "Helen Rowland"),
    quote(
        "Great things are done by a series of small things brought together.",
        "Vincent van Gogh",
    ),
    quote("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    quote("Nothing will work unless you do.", "Maya Angelou"),
    quote("Action is the foundational key to all success.", "Pablo Picasso"),
    quote("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
    quote("First, solve the problem. Then, write the code.", "John Johnson"),
    quote("Quality is not an act, it is a habit.", "Aristotle"),
];

/// Pick a quote using the current clock as the seed.
pub fn pick_random(quotes: &[Quote]) -> Option<&Quote> {
    let now = Local::now();
    let seed = now.timestamp() as u64 ^ u64::from(now.timestamp_subsec_nanos());
    pick_with_seed(quotes, seed)
}

pub fn pick_with_seed(quotes: &[Quote], seed: u64) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    // splitmix64 finaliser, so neighbouring seeds land far apart
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    quotes.get((z % quotes.len() as u64) as usize)
}
