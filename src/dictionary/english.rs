//! The built-in English dictionary. Unique prefix length: 3.

use super::DICTIONARY_SIZE;

#[rustfmt::skip]
pub(super) const WORDS: [&str; DICTIONARY_SIZE] = [
    "abandon", "abbey", "ability", "ablaze", "abnormal", "abrupt",
    "absent", "abuse", "academy", "accent", "achieve", "acid",
    "acorn", "acquire", "across", "adapt", "address", "adept",
    "adios", "adjust", "admire", "adopt", "adrift", "adult",
    "aeon", "aerial", "affair", "afraid", "aft", "again",
    "agency", "aghast", "agile", "agony", "aha", "ahead",
    "aided", "aim", "airport", "aisle", "ajar", "akin",
    "alarm", "album", "alert", "alfred", "algebra", "alias",
    "alley", "almond", "aloof", "alpha", "already", "also",
    "always", "amazing", "amber", "amend", "amidst", "ammo",
    "among", "ample", "amused", "anchor", "andrea", "anecdote",
    "angle", "animal", "ankle", "annoy", "answer", "antenna",
    "anvil", "any", "apart", "apex", "aplomb", "apology",
    "apple", "apron", "aptitude", "aquarium", "arbitrary", "ardent",
    "arena", "argue", "arise", "armor", "arnold", "aroma",
    "arrange", "arson", "ascend", "ashes", "aside", "asked",
    "aspire", "assault", "asthma", "asylum", "athena", "atlas",
    "attic", "auburn", "auction", "audio", "august", "aunt",
    "aura", "austere", "author", "avatar", "avid", "avoid",
    "awake", "awesome", "awful", "awkward", "awning", "axes",
    "axiom", "axle", "azure", "babble", "bacon", "badge",
    "baffle", "bagel", "bahama", "bailed", "baked", "bamboo",
    "banana", "baptism", "barber", "basin", "batch", "bawled",
    "bays", "bazaar", "beacon", "bedroom", "beer", "befit",
    "begun", "behind", "being", "below", "bench", "berries",
    "best", "bevel", "beware", "beyond", "bias", "bib",
    "bicycle", "bids", "bifocal", "big", "bikini", "bimonthly",
    "binocular", "biology", "biplane", "birth", "biscuit", "bite",
    "biweekly", "blank", "blip", "blob", "blue", "boat",
    "bobsled", "bodies", "bog", "boil", "bolt", "bomb",
    "bookstore", "border", "boss", "both", "bounced", "bovine",
    "bowling", "boxes", "boyfriend", "bracelet", "brick", "broken",
    "brunt", "bubble", "bucket", "budget", "buenos", "buffet",
    "bugs", "building", "bumper", "bunch", "burden", "business",
    "butter", "buying", "buzzer", "bye", "byte", "cactus",
    "cadets", "caesar", "cafe", "cage", "cairo", "cajun",
    "cake", "calamity", "camp", "capsule", "carbon", "cascade",
    "catch", "cause", "cavern", "cease", "cecilia", "cedar",
    "ceiling", "cement", "census", "certain", "chart", "cheese",
    "chicken", "chlorine", "choice", "chrome", "chunk", "cigar",
    "cinema", "cipher", "circle", "citadel", "civilian", "claim",
    "clef", "click", "club", "coal", "cobra", "cocoa",
    "code", "coffee", "cogs", "coil", "coke", "cold",
    "concur", "cool", "copy", "corrode", "cost", "cottage",
    "cousin", "cover", "cowl", "crab", "crib", "crop",
    "crumb", "cry", "cube", "cucumber", "cuddled", "cue",
    "cuffs", "culprit", "cunning", "cupcake", "curb", "custom",
    "cut", "cyan", "cycling", "dab", "dads", "dagger",
    "daily", "dallas", "damp", "dangerous", "dapper", "darted",
    "dash", "dating", "david", "daytime", "dazed", "deal",
    "debut", "decay", "dedicated", "deepest", "deftly", "degrees",
    "dehydrate", "dejected", "delayed", "demonstrate", "dented", "deodorant",
    "depth", "derby", "desk", "detect", "dewdrop", "dexter",
    "dial", "dice", "diet", "difficult", "digit", "dilute",
    "dime", "dinner", "diplomat", "directed", "disco", "ditch",
    "divers", "dizzy", "doctor", "dodge", "does", "dogs",
    "dolphin", "domestic", "donuts", "door", "dosage", "dotted",
    "double", "dove", "down", "dozen", "dreams", "drinks",
    "drowning", "drunk", "dry", "dual", "dubbed", "duckling",
    "dude", "dug", "duke", "dull", "dummy", "dunes",
    "duplex", "dusted", "duties", "dwarf", "dwelt", "dye",
    "dying", "dynamite", "dyslexic", "each", "eagle", "earth",
    "easy", "eating", "ebony", "echo", "eclipse", "ecology",
    "ecstatic", "eddie", "eden", "edgy", "edited", "educated",
    "edward", "effort", "egg", "egotistic", "egypt", "eight",
    "either", "ejected", "elapse", "elbow", "eleven", "elf",
    "elite", "elk", "elm", "else", "elvis", "emails",
    "ember", "emerge", "emotion", "empty", "emu", "enamel",
    "end", "energy", "enforce", "engine", "enhanced", "enigma",
    "enlist", "enmity", "enough", "enraged", "ensign", "entrance",
    "envy", "episode", "epoxy", "equip", "erected", "eric",
    "erosion", "error", "erupt", "escort", "eskimos", "espionage",
    "essential", "etched", "eternal", "ethics", "etiquette", "europe",
    "evaluate", "evenings", "evicted", "evolved", "ewe", "except",
    "exhale", "exit", "exotic", "expire", "exquisite", "extra",
    "exult", "eye", "fabrics", "fading", "fainted", "faked",
    "fall", "family", "fancy", "farming", "fast", "fatal",
    "fawns", "faxed", "fazed", "feast", "february", "federal",
    "feel", "feline", "females", "fences", "festival", "fever",
    "fewest", "fiat", "fibula", "fictional", "fidget", "fierce",
    "fifteen", "fight", "fin", "fiona", "firm", "fishing",
    "fitting", "five", "fixate", "fizzle", "flag", "fleet",
    "flock", "flu", "flying", "foamy", "focus", "foes",
    "foggy", "foiled", "folding", "foolish", "for", "fossil",
    "fountain", "fowls", "foxes", "foyer", "framed", "free",
    "friendly", "fruit", "frying", "fudge", "fuel", "fugitive",
    "fuji", "fully", "fuming", "fungal", "furnished", "future",
    "fuzzy", "gables", "gadget", "gags", "gained", "galaxy",
    "gambit", "gang", "gap", "gasp", "gather", "gauze",
    "gave", "gawk", "gaze", "gearbox", "gecko", "geek",
    "gemstone", "general", "geometry", "germs", "gesture", "getting",
    "geyser", "giant", "gibson", "gifts", "gills", "gimmick",
    "ginger", "girth", "gist", "giving", "gizmo", "glass",
    "gleeful", "glide", "glue", "gnaw", "gnome", "goat",
    "goblet", "goggles", "going", "gold", "gone", "good",
    "gore", "gossip", "gotten", "gourd", "gown", "grab",
    "green", "grid", "groom", "guarded", "guest", "guide",
    "gulp", "gumball", "gun", "guru", "gusts", "gutter",
    "guy", "gypsy", "gyrate", "habitat", "hacksaw", "haggled",
    "hairy", "half", "hamburger", "hand", "happens", "hashing",
    "hatchet", "haunted", "having", "hawk", "haystack", "hazard",
    "heavy", "hectare", "hedgehog", "hefty", "height", "held",
    "hemlock", "hence", "heron", "hesitate", "hew", "hexagon",
    "hiding", "highway", "hijack", "hiker", "hills", "himself",
    "hinder", "hippo", "hire", "history", "hive", "hoax",
    "hobby", "hockey", "hoisting", "holiday", "home", "honked",
    "hookup", "hope", "hospital", "hotel", "hounded", "hover",
    "howls", "hubcaps", "huddle", "hue", "huge", "humid",
    "hunter", "hurried", "husband", "hutch", "hydro", "hymn",
    "hyper", "ibiza", "iceberg", "icon", "icy", "identity",
    "idiom", "idled", "idols", "igloo", "ignore", "igor",
    "iguana", "imagine", "imbalance", "imitate", "immune", "impel",
    "inactive", "inbound", "incur", "industrial", "inexact", "ingested",
    "inherit", "initiate", "injury", "inkling", "inline", "inmate",
    "innocent", "inorganic", "inquest", "inroads", "insult", "intended",
    "inundate", "invoke", "inwardly", "ionic", "irate", "iris",
    "irritate", "isabel", "island", "isolated", "issued", "italics",
    "itches", "items", "itinerary", "itself", "ivory", "ivy",
    "jabbed", "jackets", "jaded", "jagged", "jailed", "jamming",
    "january", "japan", "jasmine", "jaunt", "java", "jaws",
    "jay", "jazz", "jeans", "jeers", "jellyfish", "jerseys",
    "jester", "jetting", "jewels", "jigsaw", "jimmy", "jingle",
    "jittery", "jive", "jobs", "joel", "jogger", "john",
    "joining", "joke", "jolted", "jordan", "jostle", "jot",
    "journal", "jubilee", "judge", "juggled", "juicy", "juliet",
    "jump", "junk", "jupiter", "jury", "justice", "juvenile",
    "kangaroo", "karate", "kayak", "keep", "keg", "kelp",
    "kennel", "kept", "kettle", "kevin", "keyboard", "kickoff",
    "kidneys", "kilometer", "kimono", "kind", "kiosk", "kisses",
    "kiwi", "knapsack", "knee", "knife", "knowledge", "koala",
    "korea", "kudos", "lab", "lace", "lagoon", "lair",
    "lakes", "lamb", "language", "laptop", "large", "last",
    "later", "laugh", "law", "layout", "lazy", "lead",
    "lecture", "ledge", "leech", "left", "legion", "lemon",
    "lending", "leopard", "lesson", "lettuce", "level", "lexicon",
    "liar", "library", "licks", "lied", "lifestyle", "ligament",
    "likewise", "lilac", "limits", "linen", "lion", "lipstick",
    "liquid", "litigate", "liver", "lizard", "llama", "loaded",
    "lobster", "locker", "lodge", "loft", "loincloth", "lola",
    "long", "looking", "lopped", "lordship", "losing", "lottery",
    "loudly", "love", "loyal", "lucky", "luggage", "lukewarm",
    "lullaby", "lumber", "lunar", "lurk", "lush", "lute",
    "lying", "lymph", "lynx", "lyrics", "macro", "madness",
    "maestro", "magically", "maimed", "major", "malady", "mammal",
    "manual", "mapped", "mar", "masterful", "match", "maul",
    "maverick", "mayor", "maze", "meant", "mechanic", "medicate",
    "meeting", "megabyte", "mehndi", "melting", "memoir", "merger",
    "mesh", "metro", "mews", "mexico", "miami", "mice",
    "midst", "mighty", "mike", "mime", "mineral", "miracle",
    "misery", "mittens", "mixture", "moan", "mobile", "mocked",
    "mode", "moisture", "molten", "moment", "money", "mood",
    "mops", "morsel", "mostly", "motherly", "movement", "mowing",
    "mozart", "much", "muddy", "muffin", "mugged", "mullet",
    "mumble", "mundane", "mural", "musical", "mute", "muzzle",
    "myriad", "mystery", "myth", "nabbing", "nadia", "nagged",
    "names", "nanny", "napkin", "narrate", "nasty", "natural",
    "navy", "nearby", "nebula", "necklace", "negative", "neither",
    "nelson", "neon", "nephew", "nerves", "nestle", "network",
    "neutral", "newt", "nexus", "nibs", "niche", "niece",
    "nifty", "nightly", "nikita", "nil", "nimbly", "nip",
    "nirvana", "nissan", "nitro", "nixon", "nobody", "nocturnal",
    "nodes", "noises", "nomad", "northern", "nostril", "noted",
    "nouns", "novelty", "nowhere", "nozzle", "nuance", "nucleus",
    "nudged", "nuisance", "null", "number", "nuns", "nurse",
    "nutshell", "nylon", "oaks", "oars", "oatmeal", "obedient",
    "object", "obliged", "obnoxious", "observe", "obtains", "obvious",
    "occur", "ocean", "odds", "odometer", "offend", "often",
    "ohio", "ohm", "oilfield", "ointment", "okay", "older",
    "olive", "olympics", "omega", "omission", "omnibus", "onboard",
    "oncoming", "onefold", "onion", "onslaught", "onto", "onward",
    "onyx", "oozed", "opacity", "opened", "opinion", "opposite",
    "optical", "orange", "orbit", "orchid", "orders", "ore",
    "organs", "origin", "orlando", "ornament", "oscar", "ostrich",
    "otherwise", "otter", "ouch", "ought", "ounce", "ourselves",
    "oust", "outbreak", "oval", "owed", "owls", "owner",
    "oxford", "oxidant", "oxygen", "oyster", "ozone", "pablo",
    "paddles", "pager", "paid", "palace", "pamphlet", "pancakes",
    "paper", "parole", "pastry", "patio", "pavement", "pawnshop",
    "payment", "peaches", "pebbles", "peculiar", "pedantic", "peeled",
    "pegs", "pelican", "people", "pepper", "perfect", "pests",
    "petals", "phase", "pheasants", "philips", "phone", "phrases",
    "piano", "picked", "pierce", "pigment", "piloted", "pimple",
    "pinched", "pioneer", "pipeline", "pistons", "pitched", "pivot",
    "pixels", "pizza", "playful", "pledge", "pliers", "plotting",
    "plus", "poaching", "pockets", "podcast", "poetry", "pogo",
    "point", "poker", "polar", "ponies", "pool", "portents",
    "possible", "potato", "pouch", "poverty", "powder", "pram",
    "present", "pride", "problems", "prying", "psychic", "public",
    "puck", "puddle", "puff", "pulp", "pumpkins", "punch",
    "purged", "push", "putty", "puzzled", "pylons", "pyramid",
    "python", "quack", "queen", "quick", "rabbits", "racetrack",
    "radar", "rafts", "rag", "railway", "raja", "rake",
    "rally", "ramped", "rapid", "rarest", "rash", "rated",
    "ravine", "raw", "ray", "read", "rebel", "record",
    "reef", "refer", "regular", "reheat", "reinvest", "rejoices",
    "rekindle", "relic", "remedy", "reorder", "repent", "reruns",
    "rest", "return", "reunion", "revamp", "rewind", "rhino",
    "rhythm", "richly", "ridges", "rift", "rigid", "rims",
    "ringing", "riots", "ripped", "rising", "ritual", "roared",
    "robot", "rockets", "rodent", "roe", "rogue", "roles",
    "romance", "rondo", "roped", "roster", "rotate", "rounded",
    "rover", "rowboat", "royal", "ruby", "rudely", "ruffled",
    "ruined", "ruling", "rumble", "runway", "rural", "rustled",
    "ruthless", "rye", "sabotage", "sack", "safety", "saga",
    "sahara", "sailor", "sake", "salads", "sample", "sanity",
    "sapling", "sarcasm", "satin", "saucepan", "saved", "sawmill",
    "sayings", "scamper", "scenic", "school", "science", "scrub",
    "scuba", "seasons", "second", "sedan", "seeded", "segments",
    "seismic", "seldom", "semifinal", "september", "sequence", "serving",
    "session", "setup", "seventh", "sewage", "shackles", "shelter",
    "shipped", "shrugged", "shuffled", "shyness", "siblings", "sickness",
    "sidekick", "sieve", "sifting", "sighting", "silk", "sincerely",
    "sipped", "siren", "sister", "situated", "sixteen", "sizes",
    "skater", "skew", "skulls", "skylark", "slackens", "sleepless",
    "slid", "slower", "slug", "sly", "smash", "smelting",
    "smog", "smuggled", "snake", "sneeze", "sniff", "snout",
    "snug", "soapy", "sober", "soccer", "software", "soggy",
    "soil", "solved", "somewhere", "sonic", "soothe", "soprano",
    "sorry", "soul", "sowed", "soya", "space", "speedy",
    "sphere", "spiders", "splendid", "spout", "sprig", "spying",
    "square", "stacking", "stellar", "stick", "stockpile", "strained",
    "stunning", "stylishly", "subtly", "suddenly", "sue", "suffice",
    "sugar", "suitcase", "sulking", "summon", "sunken", "superior",
    "surfer", "suture", "suzuki", "swagger", "swept", "swiftly",
    "sword", "swung", "syllabus", "symptoms", "syndrome", "system",
    "taboo", "tacit", "tadpoles", "tagged", "tahiti", "tail",
    "taken", "talent", "tanks", "tapestry", "tarnished", "tasked",
    "tattoo", "taunts", "tavern", "tawny", "taxi", "teardrop",
    "tedious", "teeming", "tell", "template", "tender", "tepid",
    "tequila", "terminal", "testing", "tether", "thaw", "theatrics",
    "thirsty", "thorn", "threaten", "thumbs", "thwart", "tibet",
    "tick", "tiers", "tiger", "tilt", "timber", "tinted",
    "tipsy", "tirade", "tissue", "titans", "toaster", "today",
    "toenail", "toffee", "together", "toilet", "token", "tolerant",
    "tomorrow", "tonic", "tool", "torch", "tossed", "total",
    "touchy", "towel", "toxic", "toyed", "trash", "trendy",
    "tribal", "truth", "trying", "tsunami", "tubes", "tucks",
    "tudor", "tuesday", "tufts", "tugs", "tulips", "tumbling",
    "tunnel", "turnip", "tusks", "tutor", "tuxedo", "twang",
    "tweezers", "twice", "type", "tyrant", "udder", "ugly",
    "ulcers", "ultimate", "umbrella", "umpire", "unafraid", "unbending",
    "under", "unexpected", "unfit", "ungainly", "unhappy", "union",
    "unjustly", "unknown", "unlikely", "unmask", "unopened", "unplugs",
    "unquoted", "unrest", "unsafe", "until", "unusual", "unveil",
    "unwind", "upbeat", "upcoming", "update", "upend", "upgrade",
    "uphill", "upkeep", "upload", "upon", "upper", "upstairs",
    "uptight", "upwards", "uranium", "urban", "urchins", "urgent",
    "urn", "usage", "useful", "using", "usual", "utensil",
    "utility", "utmost", "utopia", "uttered", "vacation", "vague",
    "vain", "vampire", "vane", "vapidly", "vary", "vastness",
    "vats", "vaults", "veal", "vector", "vega", "vehicle",
    "veil", "velvet", "venom", "verification", "vessel", "veteran",
    "vexed", "vials", "victim", "video", "viewpoint", "vigilant",
    "viking", "village", "vinegar", "violin", "vipers", "virtual",
    "vitals", "vivid", "vixen", "vocal", "vodka", "vogue",
    "voice", "volcano", "voodoo", "vortex", "voucher", "vowels",
    "voyage", "vulture", "wade", "waffle", "wagtail", "waist",
    "waking", "wanted", "warped", "washing", "water", "waveform",
    "waxed", "wayside", "weavers", "website", "wedge", "weird",
    "welders", "went", "wept", "were", "western", "wetsuit",
    "whale", "when", "whiff", "why", "wickets", "width",
    "wield", "wife", "wiggle", "wildly", "winter", "wipeout",
    "wise", "withdrawn", "wives", "wizard", "wobbly", "woe",
    "wok", "wolf", "womanly", "wonders", "workable", "wounded",
    "woven", "wrap", "wreck", "wrist", "wrong", "wry",
    "xray", "yacht", "yak", "yam", "yanks", "yap",
    "yard", "yawning", "yearbook", "yellow", "yen", "yesterday",
    "yew", "yields", "yip", "yodel", "yoga", "yolk",
    "yonder", "yore", "youthful", "yoyo", "yule", "zany",
    "zapped", "zeal", "zebra", "zen", "zero", "zesty",
    "zigzags", "zippers", "zodiac", "zombie", "zones", "zoom",
];
