//! Embedded word lists and target-word selection.

use std::collections::HashSet;

use anyhow::Result;
use rand::seq::IndexedRandom;

use crate::difficulty::Difficulty;

pub const EASY_WORDS: &[&str] = &[
    "able", "acid", "aged", "also", "area", "army", "away", "baby", "back", "ball", "band", "bank",
    "base", "bath", "bear", "beat", "bird", "blow", "blue", "boat", "body", "bone", "book", "born",
    "both", "bowl", "burn", "bush", "busy", "call", "calm", "came", "camp", "card", "care", "case",
    "cash", "cast", "cell", "chat", "chip", "city", "club", "coal", "coat", "code", "cold", "cool",
    "cope", "copy", "core", "cost", "crew", "crop", "dark", "data", "date", "dawn", "days", "dead",
    "deal", "dear", "debt", "deep", "deny", "desk", "dial", "diet", "dish", "does", "done", "door",
    "dose", "down", "draw", "drop", "drug", "dual", "duke", "dust", "duty", "each", "earn", "ease",
    "east", "easy", "edge", "else", "even", "ever", "exit", "face", "fact", "fail", "fair", "fall",
    "farm", "fast", "fate", "fear", "feed", "feel", "file", "fill", "film", "find", "fine", "fire",
    "firm", "fish", "five", "flat", "flow", "food", "foot", "ford", "form", "fort", "four", "free",
    "from", "fuel", "full", "fund", "gain", "game", "gate", "gave", "gear", "gift", "girl", "give",
    "glad", "goal", "goes", "gold", "golf", "gone", "good", "gray", "grew", "grow", "gulf", "hair",
    "half", "hall", "hand", "hang", "hard", "harm", "hate", "have", "head", "hear", "heat", "held",
    "hell", "help", "here", "hero", "high", "hill", "hire", "hold", "hole", "holy", "home", "hope",
    "host", "hour", "huge", "hung", "hunt", "hurt", "idea", "inch", "into", "iron", "item", "join",
    "jump", "jury", "just", "keen", "keep", "kind", "king", "knee", "knew", "know", "lack", "lady",
    "laid", "lake", "land", "lane", "last", "late", "lead", "left", "less", "life", "lift", "like",
    "line", "link", "list", "live", "load", "loan", "lock", "long", "look", "lord", "lose", "loss",
    "lost", "love", "luck", "made", "mail", "main", "make", "many", "mark", "mass", "meal", "mean",
    "meat", "meet", "menu", "mere", "mild", "mile", "milk", "mind", "mine", "miss", "mode", "mood",
    "moon", "more", "most", "move", "much", "must", "name", "near", "neck", "need", "news", "next",
    "nice", "nine", "none", "nose", "note", "okay", "once", "only", "onto", "open", "oral", "over",
    "pace", "pack", "page", "paid", "pain", "pair", "palm", "park", "part", "pass", "past", "path",
    "peak", "pick", "pink", "pipe", "plan", "play", "plot", "plus", "poll", "pool", "poor", "port",
    "post", "pull", "pure", "push", "race", "rail", "rain", "rank", "rare", "rate", "read", "real",
    "rear", "rely", "rent", "rest", "rice", "rich", "ride", "ring", "rise", "risk", "road", "rock",
    "role", "roll", "roof", "room", "root", "rose", "rule", "rush", "safe", "sail", "sale", "salt",
    "same", "sand", "save", "seat", "seed", "seek", "seem", "seen", "self", "sell", "send", "ship",
    "shop", "shot", "show", "shut", "sick", "side", "sign", "site", "size", "skin", "slip", "slow",
    "snow", "soft", "soil", "sold", "sole", "some", "song", "soon", "sort", "soul", "spot", "star",
    "stay", "step", "stop", "such", "suit", "sure", "take", "tale", "talk", "tall", "tank", "tape",
    "task", "team", "tech", "tell", "tend", "term", "test", "text", "than", "that", "them", "then",
    "thin", "this", "thus", "till", "time", "tiny", "told", "toll", "tone", "tony", "took", "tool",
    "tour", "town", "tree", "trip", "true", "tune", "turn", "twin", "type", "unit", "upon", "used",
    "user", "vary", "vast", "very", "vice", "view", "vote", "wage", "wait", "wake", "walk", "wall",
    "want", "ward", "warm", "wash", "wave", "ways", "weak", "wear", "week", "well", "went", "were",
    "west", "what", "when", "whom", "wide", "wife", "wild", "will", "wind", "wine", "wing", "wire",
    "wise", "wish", "with", "wood", "word", "wore", "work", "yard", "yeah", "year", "your", "zero",
    "zone",
];

pub const MEDIUM_WORDS: &[&str] = &[
    "about", "above", "abuse", "actor", "acute", "admit", "adopt", "adult", "after", "again",
    "agent", "agree", "ahead", "alarm", "album", "alert", "alike", "alive", "alloy", "allow",
    "alone", "along", "alter", "among", "anger", "angle", "angry", "apart", "apple", "apply",
    "arena", "argue", "arise", "array", "aside", "asset", "audio", "audit", "avoid", "award",
    "aware", "badly", "baker", "bases", "basic", "basis", "beach", "began", "begin", "begun",
    "being", "below", "bench", "billy", "birth", "black", "blame", "blind", "block", "blood",
    "board", "boost", "booth", "bound", "brain", "brand", "bread", "break", "breed", "brief",
    "bring", "broad", "broke", "brown", "build", "built", "buyer", "cable", "calif", "carry",
    "catch", "cause", "chain", "chair", "chart", "chase", "cheap", "check", "chest", "chief",
    "child", "china", "chose", "civil", "claim", "class", "clean", "clear", "click", "clock",
    "close", "coach", "coast", "could", "count", "court", "cover", "craft", "crane", "crash",
    "cream", "crime", "cross", "crowd", "crown", "curve", "cycle", "daily", "dance", "dated",
    "dealt", "death", "debut", "delay", "depth", "doing", "doubt", "dozen", "draft", "drama",
    "drawn", "dream", "dress", "drill", "drink", "drive", "drove", "dying", "eager", "early",
    "earth", "eight", "elite", "empty", "enemy", "enjoy", "enter", "entry", "equal", "error",
    "event", "every", "exact", "exist", "extra", "faith", "false", "fault", "fiber", "field",
    "fifth", "fifty", "fight", "final", "first", "fixed", "flash", "fleet", "floor", "fluid",
    "focus", "force", "forth", "forty", "forum", "found", "frame", "frank", "fraud", "fresh",
    "front", "fruit", "fully", "funny", "giant", "given", "glass", "globe", "going", "grace",
    "grade", "grand", "grant", "grass", "great", "green", "gross", "group", "grown", "guard",
    "guess", "guest", "guide", "happy", "harry", "heart", "heavy", "hello", "hence", "horse",
    "hotel", "house", "human", "ideal", "image", "index", "inner", "input", "issue", "joint",
    "judge", "known", "label", "large", "laser", "later", "laugh", "layer", "learn", "lease",
    "least", "leave", "legal", "lemon", "level", "light", "limit", "links", "lives", "local",
    "logic", "loose", "lower", "lucky", "lunch", "lying", "magic", "major", "maker", "march",
    "match", "maybe", "mayor", "meant", "media", "metal", "might", "minor", "minus", "mixed",
    "model", "money", "month", "moral", "motor", "mount", "mouse", "mouth", "movie", "music",
    "needs", "never", "newly", "night", "noise", "north", "noted", "novel", "nurse", "occur",
    "ocean", "offer", "often", "order", "other", "ought", "paint", "panel", "paper", "party",
    "peace", "phase", "phone", "photo", "piece", "pilot", "pitch", "place", "plain", "plane",
    "plant", "plate", "point", "pound", "power", "press", "price", "pride", "prime", "print",
    "prior", "prize", "proof", "proud", "prove", "queen", "quick", "quiet", "quite", "radio",
    "raise", "range", "rapid", "ratio", "reach", "ready", "refer", "right", "rival", "river",
    "robin", "roger", "roman", "rough", "round", "route", "royal", "rural", "scale", "scene",
    "scope", "score", "sense", "serve", "seven", "shall", "shape", "share", "sharp", "sheet",
    "shelf", "shell", "shift", "shirt", "shock", "shoot", "short", "shown", "sight", "since",
    "sixth", "sixty", "sized", "skill", "slate", "sleep", "slide", "small", "smart", "smile",
    "smith", "smoke", "solid", "solve", "sorry", "sound", "south", "space", "spare", "speak",
    "speed", "spend", "spent", "split", "spoke", "sport", "staff", "stage", "stake", "stand",
    "start", "state", "steam", "steel", "stick", "still", "stock", "stone", "stood", "store",
    "storm", "story", "strip", "stuck", "study", "stuff", "style", "sugar", "suite", "super",
    "sweet", "table", "taken", "taste", "taxes", "teach", "teeth", "terry", "texas", "thank",
    "theft", "their", "theme", "there", "these", "thick", "thing", "think", "third", "those",
    "three", "threw", "throw", "tight", "times", "tired", "title", "today", "topic", "total",
    "touch", "tough", "tower", "track", "trade", "train", "treat", "trend", "trial", "tried",
    "tries", "truck", "truly", "trust", "truth", "twice", "under", "undue", "union", "unity",
    "until", "upper", "upset", "urban", "usage", "usual", "valid", "value", "video", "virus",
    "visit", "vital", "voice", "waste", "watch", "water", "wheel", "where", "which", "while",
    "white", "whole", "whose", "woman", "women", "world", "worry", "worse", "worst", "worth",
    "would", "wound", "write", "wrong", "wrote", "yield", "young", "youth",
];

pub const HARD_WORDS: &[&str] = &[
    "absolute", "abstract", "academic", "accepted", "accident", "accuracy", "accurate",
    "achieved", "acquired", "activity", "actually", "addition", "adequate", "adjacent",
    "adjusted", "advanced", "advisory", "advocate", "affected", "aircraft", "alliance",
    "although", "aluminum", "analysis", "announce", "anywhere", "apparent", "appendix",
    "approach", "approval", "argument", "artistic", "assembly", "assuming", "athletic",
    "attached", "attitude", "attorney", "audience", "autonomy", "aviation", "bachelor",
    "bacteria", "baseball", "bathroom", "becoming", "benjamin", "birthday", "boundary",
    "breaking", "breeding", "building", "bulletin", "business", "calendar", "campaign",
    "capacity", "casualty", "catching", "category", "chairman", "champion",
    "chemical", "children", "civilian", "clearing", "clinical", "clothing",
    "collapse", "colonial", "combined", "commence", "commerce", "complain", "complete",
    "composed", "compound", "comprise", "computer", "conclude", "concrete", "conflict",
    "confused", "congress", "consider", "constant", "consumer", "continue", "contract",
    "contrary", "contrast", "convince", "corridor", "coverage", "covering", "creation",
    "creative", "criminal", "critical", "crossing", "cultural", "currency", "customer",
    "database", "daughter", "deadline", "decision", "decrease", "delivery",
    "describe", "designer", "detailed", "diabetes", "dialogue", "diameter", "directly",
    "director", "disabled", "disaster", "discount", "discover", "disorder", "disposal",
    "distance", "distinct", "district", "dividend", "division", "doctrine", "document",
    "domestic", "dominant", "dominate", "doorstep", "dramatic", "dressing", "drinking",
    "duration", "dynamics", "earnings", "economic", "educated", "efficacy", "eighteen",
    "election", "electric", "eligible", "emerging", "emphasis", "employee", "employer",
    "engaging", "engineer", "enormous", "entirely", "entrance", "envelope", "equation",
    "estimate", "evaluate", "eventual", "everyday", "everyone", "evidence", "exchange",
    "exciting", "exercise", "existing", "expanded", "expected", "explicit",
    "exposure", "extended", "external", "facility", "familiar", "featured", "feedback",
    "festival", "finished", "flagship", "flexible", "football", "forecast", "formerly",
    "fourteen", "fraction", "frequent", "friendly", "frontier", "function",
    "generate", "generous", "goodwill", "governor", "graduate", "graphics", "grateful",
    "guidance", "handling", "hardware", "heritage", "highland", "historic", "homeless",
    "homepage", "hospital", "humanity", "identify", "identity", "ideology", "imperial",
    "incident", "increase", "indicate", "indirect", "industry", "informal", "informed",
    "inherent", "initiate", "innocent", "inspired", "instance", "instruct", "interact",
    "interest", "interior", "internal", "interval", "intimate", "intranet", "invasion",
    "involved", "isolated", "judgment", "judicial", "junction", "keyboard", "landlord",
    "language", "laughter", "learning", "leverage", "lifetime", "likewise", "literary", "location", "magazine", "magnetic", "maintain", "majority", "marriage",
    "material", "maturity", "meantime", "measured", "medicine", "medieval", "membrane",
    "memorial", "merchant", "midnight", "military", "minimize", "minister", "ministry",
    "minority", "mobility", "moderate", "modified", "momentum", "monetary", "moreover",
    "mortgage", "mountain", "movement", "multiple", "national", "negative", "nineteen",
    "northern", "notebook", "numerous", "observer", "occasion", "offering", "official",
    "operator", "opponent", "opposite", "optimism", "ordinary", "organize", "original",
    "overcome", "overhead", "overseas", "overview", "painting", "parallel", "parental",
    "patience", "peaceful", "periodic", "personal", "persuade", "petition", "physical",
    "planning", "platform", "pleasant", "pleasure", "politics", "portable", "portrait",
    "position", "positive", "possible", "powerful", "practice", "precious", "pregnant",
    "presence", "preserve", "pressure", "previous", "princess", "printing", "priority",
    "probable", "probably", "producer", "profound", "progress", "property", "proposal",
    "prospect", "protocol", "provided", "provider", "province", "publicly",
    "purchase", "pursuant", "quantity", "question", "reaction", "received", "receiver",
    "recently", "recovery", "regional", "register", "relation", "relative", "relevant",
    "reliable", "religion", "remember", "reporter", "republic", "required", "research",
    "reserved", "resident", "resource", "response", "restrict", "revision", "rhetoric",
    "romantic", "sampling", "scenario", "schedule", "scrutiny", "seasonal", "secondly",
    "security", "sensible", "sentence", "separate", "sequence", "sergeant", "shipping",
    "shortage", "shoulder", "simplify", "situated", "slightly", "software", "solution",
    "somebody", "somewhat", "southern", "speaking", "specific", "spectrum", "sporting",
    "standard", "standing", "strategy", "strength", "striking", "struggle", "stunning",
    "suburban", "suitable", "superior", "supplier", "surgical", "surprise", "survival",
    "sweeping", "swimming", "symbolic", "sympathy", "syndrome", "tactical", "tailored",
    "takeover", "tangible", "taxation", "teaching", "tendency", "terminal", "terrible",
    "thirteen", "thorough", "thousand", "together", "tomorrow", "tracking", "training",
    "transfer", "traveled", "treasury", "triangle", "tropical", "turnover",
    "ultimate", "umbrella", "universe", "unlikely", "valuable", "variable", "vertical",
    "violence", "volatile", "warranty", "weakness", "weighted", "whatever",
    "whenever", "wherever", "wildlife", "withdraw", "workshop", "yourself",
];

pub fn words_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY_WORDS,
        Difficulty::Medium => MEDIUM_WORDS,
        Difficulty::Hard => HARD_WORDS,
    }
}

/// Supplies target words for the engine. Selection policy lives here, not in
/// the engine: the engine only requires a word of the configured length.
pub trait WordProvider {
    fn next_word(&mut self, difficulty: Difficulty) -> Result<String>;
}

/// Uniform random selection over the embedded lists, non-repeating within a
/// session. Once every word of a tier has been served, the used-set for that
/// tier resets.
pub struct RandomWordProvider {
    used: HashSet<String>,
}

impl RandomWordProvider {
    pub fn new() -> Self {
        Self {
            used: HashSet::new(),
        }
    }
}

impl Default for RandomWordProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WordProvider for RandomWordProvider {
    fn next_word(&mut self, difficulty: Difficulty) -> Result<String> {
        let pool = words_for(difficulty);

        let fresh: Vec<&&str> = pool
            .iter()
            .filter(|w| !self.used.contains(**w))
            .collect();

        let candidates = if fresh.is_empty() {
            // Tier exhausted; start over
            self.used.retain(|w| w.len() != difficulty.config().word_length);
            pool.iter().collect()
        } else {
            fresh
        };

        let selected = candidates
            .choose(&mut rand::rng())
            .ok_or_else(|| anyhow::anyhow!("no {} words available", difficulty))?;

        let word = selected.to_lowercase();
        self.used.insert(word.clone());
        Ok(word)
    }
}
