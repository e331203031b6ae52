/// Static profanity wordlist, all lowercase. Matched whole-token against
/// lowercased input.
pub(crate) const WORDLIST: &[&str] = &[
    "arse",
    "arsehole",
    "ass",
    "asses",
    "asshole",
    "assholes",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bollocks",
    "bullshit",
    "cock",
    "crap",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "douche",
    "douchebag",
    "dumbass",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fucking",
    "goddamn",
    "jackass",
    "motherfucker",
    "motherfucking",
    "piss",
    "pissed",
    "prick",
    "pussy",
    "shit",
    "shits",
    "shitty",
    "slut",
    "sluts",
    "twat",
    "wanker",
    "whore",
    "whores",
];
