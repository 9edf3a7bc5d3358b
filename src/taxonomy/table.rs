//! Ordered alias tables mapping lowercase phrases to canonical names.

use ahash::AHashMap;

/// Built-in interest aliases. Order matters: partial matching returns the first hit.
///
/// Keys of three letters or more are matched as substrings of longer input, so short
/// generic words ("art", "rap") only appear inside longer phrases.
pub const INTEREST_ALIASES: &[(&str, &str)] = &[
    // Listed before "artificial intelligence" so a bare "art" resolves here
    ("visual arts", "Art"),
    ("fine art", "Art"),
    ("drawing", "Art"),
    ("painting", "Art"),
    ("sketching", "Art"),
    // AI & Machine Learning
    ("ai", "AI & Machine Learning"),
    ("artificial intelligence", "AI & Machine Learning"),
    ("machine learning", "AI & Machine Learning"),
    ("ml", "AI & Machine Learning"),
    ("deep learning", "AI & Machine Learning"),
    ("llms", "AI & Machine Learning"),
    ("neural networks", "AI & Machine Learning"),
    // Software
    ("programming", "Software Engineering"),
    ("coding", "Software Engineering"),
    ("software engineering", "Software Engineering"),
    ("software development", "Software Engineering"),
    ("web development", "Software Engineering"),
    ("computer science", "Software Engineering"),
    // Startups
    ("startups", "Startups & Entrepreneurship"),
    ("entrepreneurship", "Startups & Entrepreneurship"),
    ("venture capital", "Startups & Entrepreneurship"),
    ("founders", "Startups & Entrepreneurship"),
    // Money
    ("finance", "Finance & Investing"),
    ("investing", "Finance & Investing"),
    ("stocks", "Finance & Investing"),
    ("stock market", "Finance & Investing"),
    ("personal finance", "Finance & Investing"),
    ("crypto", "Crypto & Web3"),
    ("cryptocurrency", "Crypto & Web3"),
    ("bitcoin", "Crypto & Web3"),
    ("web3", "Crypto & Web3"),
    ("blockchain", "Crypto & Web3"),
    // Music
    ("music", "Music"),
    ("hip hop", "Music"),
    ("hip-hop", "Music"),
    ("rap music", "Music"),
    ("rapping", "Music"),
    ("indie music", "Music"),
    ("music production", "Music"),
    ("concerts", "Music"),
    // Games
    ("gaming", "Gaming"),
    ("video games", "Gaming"),
    ("esports", "Gaming"),
    ("minecraft", "Gaming"),
    // Screen
    ("filmmaking", "Film & TV"),
    ("movies", "Film & TV"),
    ("tv shows", "Film & TV"),
    ("cinema", "Film & TV"),
    ("anime", "Anime & Manga"),
    ("manga", "Anime & Manga"),
    ("stand-up comedy", "Comedy"),
    ("comedy", "Comedy"),
    ("podcasts", "Podcasts"),
    // Body
    ("fitness", "Fitness"),
    ("gym", "Fitness"),
    ("working out", "Fitness"),
    ("weightlifting", "Fitness"),
    ("running", "Fitness"),
    ("mental health", "Health & Wellness"),
    ("wellness", "Health & Wellness"),
    ("health", "Health & Wellness"),
    ("meditation", "Health & Wellness"),
    ("sports", "Sports"),
    ("basketball", "Sports"),
    ("soccer", "Sports"),
    ("football", "Sports"),
    // Making
    ("photography", "Photography"),
    ("fashion", "Fashion"),
    ("streetwear", "Fashion"),
    ("graphic design", "Design"),
    ("ui design", "Design"),
    ("design", "Design"),
    ("cooking", "Food & Cooking"),
    ("baking", "Food & Cooking"),
    ("food", "Food & Cooking"),
    // Ideas
    ("science", "Science"),
    ("physics", "Science"),
    ("astronomy", "Science"),
    ("space exploration", "Science"),
    ("biology", "Science"),
    ("graphic novels", "Books & Writing"),
    ("books", "Books & Writing"),
    ("reading", "Books & Writing"),
    ("writing", "Books & Writing"),
    ("philosophy", "Philosophy"),
    ("politics", "Politics & News"),
    ("news", "Politics & News"),
    ("current events", "Politics & News"),
    ("travel", "Travel"),
    ("education", "Education"),
];

/// Built-in school aliases.
pub const SCHOOL_ALIASES: &[(&str, &str)] = &[
    ("cuny hunter college", "Hunter College"),
    ("hunter college", "Hunter College"),
    ("cuny hunter", "Hunter College"),
    ("columbia", "Columbia University"),
    ("columbia university", "Columbia University"),
    ("columbia uni", "Columbia University"),
    ("mcmaster", "McMaster University"),
    ("mcmaster university", "McMaster University"),
    ("mcmaster uni", "McMaster University"),
    ("rutgers", "Rutgers University"),
    ("rutgers university", "Rutgers University"),
    ("rutgers uni", "Rutgers University"),
    ("rutgers the state university of new jersey", "Rutgers University"),
    ("university of toronto", "University of Toronto"),
    ("u of t", "University of Toronto"),
    ("uoft", "University of Toronto"),
    ("toronto", "University of Toronto"),
    ("uc san diego", "UC San Diego"),
    ("university of california san diego", "UC San Diego"),
    ("ucsd", "UC San Diego"),
    ("san diego", "UC San Diego"),
    ("fordham", "Fordham University"),
    ("fordham university", "Fordham University"),
    ("monash", "Monash University"),
    ("monash university", "Monash University"),
];

/// An append-only, insertion-ordered map from lowercase alias to canonical name.
///
/// Lookups by exact key go through a hash index; iteration follows insertion order,
/// which the normalizer's partial matching depends on.
#[derive(Debug, Clone, Default)]
pub struct CanonicalTable {
    entries: Vec<(String, String)>,
    index: AHashMap<String, usize>,
}

impl CanonicalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with [`INTEREST_ALIASES`].
    pub fn interests() -> Self {
        Self::from_entries(INTEREST_ALIASES.iter().copied())
    }

    /// Table seeded with [`SCHOOL_ALIASES`].
    pub fn schools() -> Self {
        Self::from_entries(SCHOOL_ALIASES.iter().copied())
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        table.extend(entries);
        table
    }

    /// Append an alias. Keys are trimmed and lowercased; an alias that is already
    /// present keeps its first mapping. Returns whether the entry was added.
    pub fn append(&mut self, alias: &str, canonical: impl Into<String>) -> bool {
        let key = alias.trim().to_lowercase();
        if key.is_empty() || self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, canonical.into()));
        true
    }

    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (alias, canonical) in entries {
            if !self.append(alias.as_ref(), canonical) {
                tracing::debug!("Ignoring duplicate alias '{}'", alias.as_ref());
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
