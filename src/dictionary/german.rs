//! The built-in German dictionary. Unique prefix length: 4 `char`s;
//! many entries carry umlauts inside the prefix window.

use super::DICTIONARY_SIZE;

#[rustfmt::skip]
pub(super) const WORDS: [&str; DICTIONARY_SIZE] = [
    "abart", "abbau", "abecedarium", "abend", "aber", "abfahrt",
    "abgrund", "abhang", "abhilfe", "abkehr", "ablauf", "abluft",
    "abmachung", "abreise", "abruf", "absage", "abschied", "abstand",
    "abteil", "abwasser", "abwehr", "achse", "acht", "ackerbau",
    "adjutant", "adler", "admiral", "adoption", "adverb", "affe",
    "affäre", "afrika", "ahnung", "ahorn", "airbag", "akademie",
    "akku", "akrobat", "aktie", "akustik", "akzent", "alarm",
    "albtraum", "alge", "algorithmus", "alibi", "alkohol", "alltag",
    "almanach", "almosen", "alpen", "alphabet", "alter", "aluminium",
    "ambiente", "amboss", "ameise", "amerika", "ampel", "ampulle",
    "amsel", "amulett", "ananas", "anarchie", "anatomie", "anbieter",
    "andacht", "andenken", "anekdote", "anfrage", "angebot", "angler",
    "angst", "anis", "anker", "ankunft", "anlage", "anmeldung",
    "anmut", "annahme", "anprobe", "anrede", "anruf", "ansage",
    "anspruch", "anstalt", "anteil", "antike", "antwort", "anwalt",
    "anwesen", "anzahl", "anzug", "aorta", "apfel", "apotheke",
    "apparat", "appetit", "april", "aquädukt", "araber", "arbeit",
    "archiv", "arena", "argument", "argwohn", "arie", "arktis",
    "armband", "armee", "aroma", "arrest", "arterie", "artikel",
    "arzt", "asbest", "asche", "asien", "aspekt", "aspirin",
    "assistent", "asyl", "atelier", "atem", "athen", "atlas",
    "atmung", "atoll", "atomkraft", "attentat", "attraktion", "audienz",
    "auerhahn", "auferstehung", "auffahrt", "aufgabe", "aufnahme", "aufprall",
    "aufruf", "aufsatz", "aufwand", "aufzug", "auge", "august",
    "aula", "ausbau", "ausdruck", "ausfahrt", "aushang", "auskunft",
    "auslage", "ausnahme", "auspuff", "ausrede", "aussage", "auswahl",
    "auszug", "auto", "avocado", "azubi", "bach", "backofen",
    "badeanzug", "bahnhof", "bahre", "balance", "balkon", "ballade",
    "balsam", "bambus", "bandit", "bangigkeit", "banjo", "bank",
    "barbar", "barde", "barett", "bariton", "barmherzigkeit", "barock",
    "barren", "bart", "basalt", "base", "basilikum", "bass",
    "bastion", "bataillon", "batist", "bauch", "bauer", "baum",
    "bausch", "bazar", "bazillus", "beamter", "beben", "becher",
    "becken", "bedarf", "bedienung", "beduine", "beere", "beet",
    "befund", "begabung", "begegnung", "begriff", "behagen", "behälter",
    "behörde", "beil", "bein", "beispiel", "beitrag", "bekannte",
    "belag", "beleg", "belieben", "bemerkung", "bengel", "benzin",
    "bereich", "bergwerk", "bericht", "bernstein", "beschluss", "besen",
    "besitz", "bestand", "beteiligung", "beton", "betrag", "bett",
    "beule", "beutel", "bevölkerung", "bewusstsein", "bewährung", "bezirk",
    "bezug", "bibliothek", "biegung", "biene", "bier", "bildung",
    "billard", "bimsstein", "binde", "biographie", "biologie", "birke",
    "bischof", "bison", "bistum", "bitte", "blamage", "blase",
    "blatt", "blaubeere", "blei", "blende", "blessur", "blick",
    "blitz", "blockade", "blume", "bläser", "blödsinn", "blüte",
    "bock", "bogen", "bohne", "bohrer", "boiler", "bollwerk",
    "bolzen", "bombe", "bonus", "boot", "bord", "borke",
    "botanik", "bote", "botschaft", "boulevard", "boxer", "boykott",
    "brache", "brand", "braten", "brauch", "brecher", "bremse",
    "brennerei", "bresche", "brett", "brief", "brigade", "brikett",
    "brille", "brocken", "brombeere", "bronze", "brosche", "bruch",
    "brunnen", "brust", "bräutigam", "brücke", "bube", "buch",
    "bude", "buggy", "bulle", "bummel", "bunker", "burg",
    "bursche", "busch", "bäcker", "börse", "böschung", "büfett",
    "bügel", "bühne", "bünde", "bürger", "büro", "bürste",
    "büste", "cellist", "cembalo", "chamäleon", "chance", "charakter",
    "chauffeur", "chef", "chicoree", "china", "chip", "chirurg",
    "chor", "christbaum", "chronik", "clique", "coach", "cockpit",
    "code", "couch", "coupon", "courage", "cousin", "creme",
    "curry", "dach", "dackel", "damast", "dame", "damm",
    "dampf", "darlehen", "dasein", "dattel", "daube", "dauer",
    "daumen", "debatte", "dechant", "decke", "defekt", "defizit",
    "dehnung", "deich", "dekade", "deklination", "delegation", "delfin",
    "delle", "demut", "denkmal", "depesche", "depot", "derby",
    "desaster", "desinfektion", "despot", "destillat", "detail", "detektiv",
    "deutung", "dezember", "diadem", "diagramm", "diamant", "dichter",
    "dickicht", "didaktik", "diele", "dienst", "diesel", "differenz",
    "diktat", "dilemma", "dill", "dimension", "ding", "diopter",
    "diplom", "dirigent", "dirne", "diskant", "disput", "disziplin",
    "diva", "diwan", "diät", "dogge", "dogma", "dohle",
    "dolch", "dolmetscher", "domino", "domäne", "donau", "donner",
    "doppelgänger", "dorado", "dorn", "dorsch", "dose", "dossier",
    "dozent", "drache", "draht", "drama", "drang", "drehbuch",
    "dreieck", "drillich", "drittel", "droge", "drohne", "druck",
    "drüse", "dschungel", "dualismus", "duett", "duft", "dukaten",
    "dunkelheit", "dunst", "duplikat", "durchblick", "dusche", "dutzend",
    "dynamik", "dämmerung", "düne", "düngung", "dünung", "dürre",
    "ebbe", "ebene", "eber", "echse", "ecke", "edelstein",
    "efeu", "eiche", "eidechse", "eierkuchen", "eifer", "eignung",
    "eiland", "eile", "eimer", "einband", "eindruck", "einerlei",
    "eingang", "einheit", "einkauf", "einlage", "einnahme", "einrede",
    "einsatz", "eintrag", "einwand", "einzug", "einöde", "eisbär",
    "eiszapfen", "eiter", "eiweiß", "elan", "elastizität", "elch",
    "elefant", "elektrik", "element", "elend", "elfenbein", "ellbogen",
    "ellipse", "eloge", "eltern", "emaille", "emigrant", "empfang",
    "emsigkeit", "ende", "energie", "engagement", "engpass", "enkel",
    "ensemble", "ente", "entgelt", "enthusiasmus", "entscheidung", "entzug",
    "enzian", "epidemie", "epik", "epoche", "epos", "erbarmen",
    "erbe", "erdbeere", "erdgas", "erdöl", "ereignis", "erfinder",
    "erfolg", "ergebnis", "erhalt", "erinnerung", "erker", "erlass",
    "ermittlung", "ernst", "ernte", "eroberung", "errungenschaft", "ersatz",
    "erscheinung", "erstaunen", "erwachsene", "erzeugnis", "erzähler", "esche",
    "esel", "eskorte", "espe", "essay", "essenz", "essig",
    "estrich", "etappe", "etat", "ethik", "etikett", "etüde",
    "eule", "euphorie", "euter", "ewigkeit", "examen", "exil",
    "exot", "experte", "explosion", "export", "fabel", "fabrik",
    "fachwerk", "fackel", "fagott", "fahne", "fahrrad", "fakultät",
    "falke", "falle", "falter", "familie", "fanfare", "fang",
    "fantasie", "farce", "farn", "fasan", "faser", "fass",
    "fastenzeit", "faulheit", "faust", "favorit", "faxgerät", "fazit",
    "feder", "feedback", "fehde", "fehler", "feier", "feile",
    "feind", "felge", "fell", "fels", "fenster", "fernsehen",
    "ferse", "fertigung", "fessel", "feudalismus", "feuer", "feuilleton",
    "fiaker", "fichte", "fieber", "fiktion", "filiale", "filter",
    "filz", "finale", "finesse", "finger", "fink", "finsternis",
    "fisch", "fiskus", "fistel", "fittich", "fjord", "flachs",
    "fladen", "flair", "flamme", "flanell", "flasche", "flechte",
    "fledermaus", "flegel", "fleiß", "flinte", "floh", "floskel",
    "floß", "flug", "flunder", "flur", "flut", "fläche",
    "flöte", "flöz", "flüstern", "fohlen", "fokus", "folge",
    "folie", "folter", "fonds", "fontäne", "form", "forschung",
    "fortschritt", "forum", "foto", "fracht", "frage", "fraktion",
    "frechheit", "fregatte", "freiheit", "fremde", "freske", "frettchen",
    "freude", "frist", "fron", "frosch", "frucht", "fröhlichkeit",
    "früchte", "frühling", "fuchs", "fuhre", "fund", "funke",
    "furcht", "furt", "futter", "fächer", "färbung", "föderation",
    "föhn", "förderung", "führung", "fülle", "fünfeck", "gabel",
    "gage", "galerie", "galgen", "galopp", "gamasche", "gamsbart",
    "gans", "garage", "garbe", "gardine", "garten", "gasse",
    "gastgeber", "gattung", "gaze", "gebet", "gebiet", "geblüt",
    "geburt", "gebäude", "gebühr", "gedanke", "gedeck", "gedicht",
    "geduld", "gefahr", "geflügel", "gefolge", "gefälle", "gegend",
    "gegner", "gehalt", "geheimnis", "gehweg", "gehöft", "geier",
    "geist", "geld", "geleit", "gelände", "gemach", "gemeinde",
    "gemisch", "gemälde", "genehmigung", "genie", "genosse", "genuss",
    "geografie", "gepard", "gepäck", "gericht", "gerste", "geruch",
    "gerät", "gesang", "geschenk", "gesetz", "gesicht", "gestalt",
    "gesuch", "getränk", "gewalt", "gewehr", "gewinn", "gewohnheit",
    "gezeiten", "geäst", "gicht", "giebel", "gift", "gilde",
    "ginster", "gipfel", "giraffe", "gischt", "gitarre", "glanz",
    "glas", "glatze", "glaube", "gletscher", "glied", "glimmer",
    "glocke", "glut", "gläubiger", "glück", "gnade", "gobelin",
    "gold", "golf", "gong", "gorilla", "gosse", "gotik",
    "gourmet", "gouverneur", "graben", "grad", "gram", "granit",
    "graphit", "gras", "gravur", "greis", "gremium", "grieß",
    "griff", "grille", "grimasse", "grips", "grog", "groschen",
    "grotte", "grube", "gruft", "grundriss", "gruppe", "gruß",
    "grübchen", "grünkohl", "gunst", "gurke", "gussform", "gutachten",
    "gyros", "gärung", "gürtel", "güte", "hafen", "haft",
    "hagel", "haken", "halle", "hals", "haltung", "hand",
    "hang", "harfe", "harz", "hass", "haube", "hauch",
    "haufen", "haut", "hebel", "hecht", "heer", "hefe",
    "heft", "heide", "heimat", "heirat", "heizung", "held",
    "helm", "hemd", "hengst", "henkel", "herd", "herkunft",
    "herr", "hexe", "hieb", "hilfe", "himbeere", "hindernis",
    "hirn", "hirsch", "hirt", "hobel", "hochzeit", "holz",
    "honig", "horn", "hose", "hotel", "humor", "hund",
    "hunger", "hupe", "hyäne", "höhe", "höhle", "hügel",
    "hürde", "hütte", "idee", "imbiss", "imker", "import",
    "index", "industrie", "infanterie", "inhalt", "inland", "insel",
    "instanz", "inventar", "irrtum", "jagd", "jahr", "januar",
    "jugend", "juli", "junge", "juni", "juwel", "kabel",
    "kachel", "kader", "kajüte", "kakao", "kalb", "kalender",
    "kamel", "kamin", "kammer", "kanal", "kanone", "kante",
    "kanu", "kapelle", "karotte", "karte", "kasse", "katze",
    "kauf", "kegel", "kehle", "keim", "keks", "kelch",
    "kenntnis", "kerbe", "kern", "kerze", "kette", "keule",
    "kiefer", "kiel", "kies", "kind", "kino", "kiosk",
    "kirsche", "kissen", "kiste", "klang", "klappe", "klasse",
    "klee", "klima", "klinge", "klippe", "kloster", "kluft",
    "knabe", "knall", "knauf", "kneipe", "knie", "knoblauch",
    "knolle", "knopf", "knospe", "knoten", "koch", "koffer",
    "kohl", "koje", "kolben", "kollege", "komet", "kompass",
    "konto", "kopf", "korb", "korsett", "kost", "kotelett",
    "krabbe", "kragen", "kran", "krater", "kraut", "kreide",
    "krempe", "kreuz", "kristall", "krone", "krug", "krume",
    "krähe", "kröte", "kuchen", "kugel", "kummer", "kunde",
    "kunst", "kupfer", "kurs", "kurve", "kuss", "käfer",
    "käse", "köder", "könig", "küche", "kühler", "kürbis",
    "küste", "lache", "lack", "laden", "lage", "laich",
    "lampe", "land", "larve", "last", "laterne", "latte",
    "lauch", "lauf", "laune", "laus", "lava", "lawine",
    "leben", "leder", "lehm", "lehre", "leib", "leier",
    "leim", "leine", "leiste", "lektion", "lende", "lerche",
    "leuchte", "lexikon", "licht", "liebe", "lieferung", "liga",
    "linde", "lineal", "linse", "lippe", "list", "liter",
    "locke", "loge", "logik", "lohn", "lorbeer", "luft",
    "luke", "lupe", "lust", "luxus", "länge", "lärm",
    "löffel", "lösung", "löwe", "lüge", "maat", "macht",
    "made", "magie", "mahl", "mais", "makler", "mammut",
    "mandel", "mangel", "mappe", "marille", "mark", "marmor",
    "masche", "maske", "masse", "mast", "matratze", "matsch",
    "mauer", "maus", "maut", "meer", "mehl", "meinung",
    "meise", "melodie", "menge", "merkmal", "messe", "metall",
    "methode", "meute", "miete", "milbe", "militär", "minderheit",
    "mine", "minute", "mischung", "missgunst", "mist", "mitte",
    "mohn", "molke", "monat", "mond", "moor", "moos",
    "moral", "morgen", "most", "motiv", "motor", "mull",
    "mumie", "mund", "murmel", "museum", "musik", "muskel",
    "mutter", "mädchen", "mähne", "märchen", "möbel", "möhre",
    "mörtel", "möwe", "mühe", "mühle", "münze", "mütze",
    "nachbar", "nadel", "nagel", "naht", "name", "narbe",
    "narr", "nation", "natur", "nebel", "neffe", "neigung",
    "nelke", "nerv", "nessel", "netz", "neuigkeit", "neujahr",
    "nickel", "niere", "niete", "nilpferd", "niveau", "nordosten",
    "notar", "note", "nudel", "null", "nummer", "nuss",
    "nähe", "oase", "oberfläche", "oboe", "obst", "ochse",
    "ofen", "oktober", "olive", "onkel", "oper", "orange",
    "orchester", "orden", "ordnung", "orgel", "osten", "otter",
    "paar", "pacht", "paket", "palast", "panik", "panne",
    "panther", "papagei", "pappe", "paprika", "park", "pass",
    "pastete", "pate", "pauke", "pech", "pedal", "pegel",
    "peitsche", "pendel", "pension", "pergament", "perle", "pfad",
    "pfand", "pfarrer", "pfeffer", "pfeife", "pferd", "pfingsten",
    "pflanze", "pflicht", "pflug", "pforte", "pfote", "pfund",
    "phase", "pilger", "pilz", "pinsel", "pirat", "piste",
    "plage", "plakat", "plan", "plombe", "plunder", "pochen",
    "pokal", "polster", "pomade", "portion", "porzellan", "post",
    "pracht", "predigt", "presse", "priester", "prinz", "prise",
    "produkt", "profi", "projekt", "propeller", "protest", "proviant",
    "prozess", "prämie", "publikum", "pudding", "pudel", "puls",
    "pult", "pulver", "pumpe", "puppe", "pute", "putz",
    "qualle", "quelle", "quitte", "quote", "rabatt", "rache",
    "rahmen", "rakete", "rand", "rang", "rasen", "rasse",
    "raub", "rauch", "raum", "raupe", "reaktion", "rebe",
    "rechnung", "regal", "regel", "reich", "reifen", "reim",
    "reise", "reiz", "reklame", "rente", "rest", "rettich",
    "reue", "rezept", "rhabarber", "richter", "riemen", "riese",
    "riff", "rille", "ring", "rinne", "rippe", "risiko",
    "ritter", "rizinus", "robbe", "roboter", "roggen", "rohr",
    "rolle", "rose", "rosine", "rost", "rotor", "rubin",
    "ruder", "ruhe", "ruhm", "rummel", "rumpf", "runde",
    "rune", "rübe", "rücken", "rührung", "rüstung", "saal",
    "saat", "sache", "saft", "sage", "sahne", "saison",
    "salat", "salbe", "salz", "samen", "samstag", "samt",
    "sand", "sardine", "sarg", "satz", "sauerstoff", "schabe",
    "schema", "schicht", "schlaf", "schnabel", "schokolade", "schrank",
    "schwan", "sechseck", "sediment", "seeadler", "sehne", "seife",
    "seil", "sekunde", "semester", "senf", "sense", "september",
    "seuche", "sichel", "sieb", "signal", "silbe", "sims",
    "sinfonie", "sippe", "sirup", "sitte", "sitz", "skelett",
    "skizze", "sklave", "skorpion", "socke", "sofa", "sohle",
    "soldat", "sommer", "sonde", "sonne", "soße", "spalt",
    "spange", "spaten", "specht", "speer", "speiche", "spektakel",
    "spiegel", "spinne", "spital", "spott", "sprache", "spreu",
    "spross", "spule", "spur", "staat", "stachel", "stempel",
    "sterbehilfe", "stich", "stille", "strand", "streit", "strom",
    "stufe", "stuhl", "stunde", "sturm", "stück", "suche",
    "sumpf", "suppe", "szene", "säbel", "säge", "säule",
    "süden", "sühne", "sülze", "tabak", "tabelle", "tadel",
    "tafel", "tang", "tanne", "tante", "tanz", "tarif",
    "tasche", "tasse", "tausch", "teich", "teig", "teil",
    "tempel", "tenor", "teppich", "termin", "teufel", "theater",
    "thron", "tiefe", "tinte", "tisch", "titel", "tonne",
    "topf", "torte", "trabant", "trauer", "treppe", "tresor",
    "tribüne", "trommel", "tropfen", "trost", "trubel", "trupp",
    "träne", "tube", "tugend", "tulpe", "tunnel", "turm",
    "türke", "tüte", "ufer", "ulme", "umfang", "umgebung",
    "umhang", "umlauf", "umzug", "unfall", "ungeduld", "unkraut",
    "unrecht", "unruhe", "unschuld", "urkunde", "urlaub", "urne",
    "ursache", "urwald", "vase", "vater", "veilchen", "ventil",
    "verband", "verein", "verlag", "vermögen", "vernunft", "verrat",
    "vertrag", "verwandte", "verzicht", "vieh", "villa", "violine",
    "visier", "volk", "vollmacht", "vorbild", "vorfahre", "vorrat",
    "vorsicht", "vorteil", "vulkan", "wabe", "wache", "wade",
    "waffe", "wahl", "wahrheit", "waise", "walze", "wampe",
    "wand", "wange", "wart", "wasser", "watte", "weber",
    "weide", "weihnachten", "weile", "wein", "weizen", "welle",
    "welt", "werft", "werk", "wert", "wesen", "wette",
    "wichtel", "widder", "wiege", "wild", "wille", "wimpel",
    "wind", "winter", "wipfel", "wirbel", "wissen", "witwe",
    "witz", "woche", "wohl", "wohnung", "wolf", "wolke",
    "wonne", "wort", "wrack", "wucht", "wunsch", "wurf",
    "wurm", "wurzel", "wärme", "wäsche", "würde", "zacke",
    "zahl", "zahn", "zange", "zaun", "zebra", "zehe",
    "zeile", "zeit", "zelle", "zelt", "zentrum", "zepter",
    "zeuge", "ziege", "zimmer", "zins", "zirkel", "zitrone",
    "zoll", "zone", "zopf", "zucht", "zucker", "zufall",
    "zugang", "zunft", "zunge", "zuruf", "zuschauer", "zutat",
    "zuwachs", "zwang", "zweck", "zwerg", "zwiebel", "zwilling",
    "zwist", "zyklus", "zylinder", "ähre", "äther", "äthiopien",
];
