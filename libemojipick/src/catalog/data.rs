//! Built-in emoji table
//!
//! Entries are listed in display order. Versions are the Unicode emoji
//! version an entry first appeared in, truncated to an integer; everything
//! from the Emoji 0.6/0.7 sets is version 1.

/// How a raw entry relates to its base emoji
#[derive(Debug, Clone, Copy)]
pub(super) enum Variant {
    Base,
    SkinTone(&'static str),
    Gender(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub(super) struct RawEmoji {
    pub glyph: &'static str,
    pub aliases: &'static [&'static str],
    pub version: u32,
    pub variant: Variant,
}

const fn base(glyph: &'static str, aliases: &'static [&'static str], version: u32) -> RawEmoji {
    RawEmoji { glyph, aliases, version, variant: Variant::Base }
}

const fn tone(
    glyph: &'static str,
    of: &'static str,
    aliases: &'static [&'static str],
    version: u32,
) -> RawEmoji {
    RawEmoji { glyph, aliases, version, variant: Variant::SkinTone(of) }
}

const fn gendered(
    glyph: &'static str,
    of: &'static str,
    aliases: &'static [&'static str],
    version: u32,
) -> RawEmoji {
    RawEmoji { glyph, aliases, version, variant: Variant::Gender(of) }
}

pub(super) static EMOJIS: &[RawEmoji] = &[
    // Smileys
    base("😀", &["grinning", "grinning face", "smile"], 1),
    base("😃", &["smiley", "grinning face with big eyes"], 1),
    base("😄", &["smile", "grinning face with smiling eyes"], 1),
    base("😁", &["grin", "beaming face with smiling eyes"], 1),
    base("😆", &["laughing", "satisfied", "grinning squinting face"], 1),
    base("😅", &["sweat smile", "grinning face with sweat"], 1),
    base("🤣", &["rofl", "rolling on the floor laughing"], 3),
    base("😂", &["joy", "face with tears of joy"], 1),
    base("🙂", &["slightly smiling face"], 1),
    base("🙃", &["upside down face"], 1),
    base("🫠", &["melting face"], 14),
    base("😉", &["wink", "winking face"], 1),
    base("😊", &["blush", "smiling face with smiling eyes"], 1),
    base("😇", &["innocent", "smiling face with halo"], 1),
    base("🥰", &["smiling face with hearts", "in love"], 11),
    base("😍", &["heart eyes", "smiling face with heart-eyes"], 1),
    base("🤩", &["star struck", "star-struck"], 5),
    base("😘", &["kissing heart", "face blowing a kiss"], 1),
    base("😋", &["yum", "face savoring food"], 1),
    base("😛", &["stuck out tongue", "face with tongue"], 1),
    base("😜", &["stuck out tongue winking eye", "winking face with tongue"], 1),
    base("🤪", &["zany face", "crazy"], 5),
    base("🤑", &["money mouth face"], 1),
    base("🤗", &["hugs", "hugging face"], 1),
    base("🤭", &["hand over mouth", "face with hand over mouth"], 5),
    base("🫢", &["face with open eyes and hand over mouth"], 14),
    base("🤫", &["shushing face", "shh"], 5),
    base("🤔", &["thinking", "thinking face"], 1),
    base("🫡", &["saluting face", "salute"], 14),
    base("🤐", &["zipper mouth face"], 1),
    base("🤨", &["raised eyebrow", "face with raised eyebrow"], 5),
    base("😐", &["neutral face"], 1),
    base("😑", &["expressionless", "expressionless face"], 1),
    base("😶", &["no mouth", "face without mouth"], 1),
    base("🫥", &["dotted line face"], 14),
    base("😏", &["smirk", "smirking face"], 1),
    base("😒", &["unamused", "unamused face"], 1),
    base("🙄", &["roll eyes", "face with rolling eyes"], 1),
    base("😬", &["grimacing", "grimacing face"], 1),
    base("🤥", &["lying face", "pinocchio"], 3),
    base("🫨", &["shaking face"], 15),
    base("😌", &["relieved", "relieved face"], 1),
    base("😔", &["pensive", "pensive face"], 1),
    base("😪", &["sleepy", "sleepy face"], 1),
    base("🤤", &["drooling face"], 3),
    base("😴", &["sleeping", "sleeping face"], 1),
    base("😷", &["mask", "face with medical mask"], 1),
    base("🤒", &["face with thermometer"], 1),
    base("🤕", &["face with head-bandage"], 1),
    base("🤢", &["nauseated face"], 3),
    base("🤮", &["vomiting", "face vomiting"], 5),
    base("🤧", &["sneezing face"], 3),
    base("🥵", &["hot face"], 11),
    base("🥶", &["cold face"], 11),
    base("🥴", &["woozy face"], 11),
    base("😵", &["dizzy face"], 1),
    base("🤯", &["exploding head", "mind blown"], 5),
    base("🤠", &["cowboy hat face"], 3),
    base("🥳", &["partying face", "party"], 11),
    base("🥸", &["disguised face"], 13),
    base("😎", &["sunglasses", "smiling face with sunglasses", "cool"], 1),
    base("🤓", &["nerd face"], 1),
    base("🧐", &["face with monocle"], 5),
    base("😕", &["confused", "confused face"], 1),
    base("🫤", &["face with diagonal mouth"], 14),
    base("😟", &["worried", "worried face"], 1),
    base("🙁", &["slightly frowning face"], 1),
    base("😮", &["open mouth", "face with open mouth"], 1),
    base("😲", &["astonished", "astonished face"], 1),
    base("😳", &["flushed", "flushed face"], 1),
    base("🥺", &["pleading face"], 11),
    base("🥹", &["face holding back tears"], 14),
    base("😦", &["frowning", "frowning face with open mouth"], 1),
    base("😨", &["fearful", "fearful face"], 1),
    base("😰", &["cold sweat", "anxious face with sweat"], 1),
    base("😢", &["cry", "crying face"], 1),
    base("😭", &["sob", "loudly crying face"], 1),
    base("😱", &["scream", "face screaming in fear"], 1),
    base("😖", &["confounded", "confounded face"], 1),
    base("😞", &["disappointed", "disappointed face"], 1),
    base("😓", &["sweat", "downcast face with sweat"], 1),
    base("😩", &["weary", "weary face"], 1),
    base("😫", &["tired face"], 1),
    base("🥱", &["yawning face", "yawn"], 12),
    base("😤", &["triumph", "face with steam from nose"], 1),
    base("😡", &["rage", "pouting face"], 1),
    base("😠", &["angry", "angry face"], 1),
    base("🤬", &["cursing face", "face with symbols on mouth"], 5),
    base("😈", &["smiling imp", "smiling face with horns"], 1),
    base("👿", &["imp", "angry face with horns"], 1),
    base("💀", &["skull"], 1),
    base("💩", &["poop", "pile of poo", "hankey"], 1),
    base("🤡", &["clown face", "clown"], 3),
    base("👻", &["ghost"], 1),
    base("👽", &["alien"], 1),
    base("🤖", &["robot"], 1),
    base("😺", &["smiley cat", "grinning cat"], 1),
    base("😻", &["heart eyes cat", "smiling cat with heart-eyes"], 1),
    base("🙈", &["see no evil", "see-no-evil monkey"], 1),
    base("🙉", &["hear no evil", "hear-no-evil monkey"], 1),
    base("🙊", &["speak no evil", "speak-no-evil monkey"], 1),
    // Hearts and marks
    base("\u{2764}\u{FE0F}", &["red heart", "heart"], 1),
    base("🧡", &["orange heart"], 5),
    base("💛", &["yellow heart"], 1),
    base("💚", &["green heart"], 1),
    base("💙", &["blue heart"], 1),
    base("💜", &["purple heart"], 1),
    base("🩵", &["light blue heart"], 15),
    base("🖤", &["black heart"], 3),
    base("🤍", &["white heart"], 12),
    base("💔", &["broken heart"], 1),
    base("💯", &["100", "hundred points"], 1),
    base("💥", &["boom", "collision"], 1),
    base("✨", &["sparkles"], 1),
    base("🔥", &["fire", "lit"], 1),
    base("💤", &["zzz"], 1),
    // Hands
    base("👋", &["wave", "waving hand"], 1),
    tone("\u{1F44B}\u{1F3FB}", "👋", &["waving hand: light skin tone"], 2),
    tone("\u{1F44B}\u{1F3FC}", "👋", &["waving hand: medium-light skin tone"], 2),
    tone("\u{1F44B}\u{1F3FD}", "👋", &["waving hand: medium skin tone"], 2),
    tone("\u{1F44B}\u{1F3FE}", "👋", &["waving hand: medium-dark skin tone"], 2),
    tone("\u{1F44B}\u{1F3FF}", "👋", &["waving hand: dark skin tone"], 2),
    base("🤚", &["raised back of hand"], 3),
    base("✋", &["raised hand", "hand"], 1),
    tone("\u{270B}\u{1F3FB}", "✋", &["raised hand: light skin tone"], 2),
    tone("\u{270B}\u{1F3FC}", "✋", &["raised hand: medium-light skin tone"], 2),
    tone("\u{270B}\u{1F3FD}", "✋", &["raised hand: medium skin tone"], 2),
    tone("\u{270B}\u{1F3FE}", "✋", &["raised hand: medium-dark skin tone"], 2),
    tone("\u{270B}\u{1F3FF}", "✋", &["raised hand: dark skin tone"], 2),
    base("👌", &["ok hand", "ok"], 1),
    tone("\u{1F44C}\u{1F3FB}", "👌", &["ok hand: light skin tone"], 2),
    tone("\u{1F44C}\u{1F3FC}", "👌", &["ok hand: medium-light skin tone"], 2),
    tone("\u{1F44C}\u{1F3FD}", "👌", &["ok hand: medium skin tone"], 2),
    tone("\u{1F44C}\u{1F3FE}", "👌", &["ok hand: medium-dark skin tone"], 2),
    tone("\u{1F44C}\u{1F3FF}", "👌", &["ok hand: dark skin tone"], 2),
    base("🤌", &["pinched fingers"], 13),
    base("\u{270C}\u{FE0F}", &["v", "victory hand", "peace"], 1),
    base("🤞", &["crossed fingers", "fingers crossed"], 3),
    tone("\u{1F91E}\u{1F3FB}", "🤞", &["crossed fingers: light skin tone"], 3),
    tone("\u{1F91E}\u{1F3FC}", "🤞", &["crossed fingers: medium-light skin tone"], 3),
    tone("\u{1F91E}\u{1F3FD}", "🤞", &["crossed fingers: medium skin tone"], 3),
    tone("\u{1F91E}\u{1F3FE}", "🤞", &["crossed fingers: medium-dark skin tone"], 3),
    tone("\u{1F91E}\u{1F3FF}", "🤞", &["crossed fingers: dark skin tone"], 3),
    base("🫰", &["hand with index finger and thumb crossed"], 14),
    base("🤟", &["love you gesture"], 5),
    base("🤘", &["metal", "sign of the horns"], 1),
    base("👈", &["point left", "backhand index pointing left"], 1),
    base("👉", &["point right", "backhand index pointing right"], 1),
    base("👆", &["point up", "backhand index pointing up"], 1),
    base("👇", &["point down", "backhand index pointing down"], 1),
    base("👍", &["+1", "thumbs up", "thumbsup", "like"], 1),
    tone("\u{1F44D}\u{1F3FB}", "👍", &["thumbs up: light skin tone"], 2),
    tone("\u{1F44D}\u{1F3FC}", "👍", &["thumbs up: medium-light skin tone"], 2),
    tone("\u{1F44D}\u{1F3FD}", "👍", &["thumbs up: medium skin tone"], 2),
    tone("\u{1F44D}\u{1F3FE}", "👍", &["thumbs up: medium-dark skin tone"], 2),
    tone("\u{1F44D}\u{1F3FF}", "👍", &["thumbs up: dark skin tone"], 2),
    base("👎", &["-1", "thumbs down", "thumbsdown", "dislike"], 1),
    tone("\u{1F44E}\u{1F3FB}", "👎", &["thumbs down: light skin tone"], 2),
    tone("\u{1F44E}\u{1F3FC}", "👎", &["thumbs down: medium-light skin tone"], 2),
    tone("\u{1F44E}\u{1F3FD}", "👎", &["thumbs down: medium skin tone"], 2),
    tone("\u{1F44E}\u{1F3FE}", "👎", &["thumbs down: medium-dark skin tone"], 2),
    tone("\u{1F44E}\u{1F3FF}", "👎", &["thumbs down: dark skin tone"], 2),
    base("✊", &["fist", "raised fist"], 1),
    base("👊", &["punch", "oncoming fist"], 1),
    base("👏", &["clap", "clapping hands"], 1),
    tone("\u{1F44F}\u{1F3FB}", "👏", &["clapping hands: light skin tone"], 2),
    tone("\u{1F44F}\u{1F3FC}", "👏", &["clapping hands: medium-light skin tone"], 2),
    tone("\u{1F44F}\u{1F3FD}", "👏", &["clapping hands: medium skin tone"], 2),
    tone("\u{1F44F}\u{1F3FE}", "👏", &["clapping hands: medium-dark skin tone"], 2),
    tone("\u{1F44F}\u{1F3FF}", "👏", &["clapping hands: dark skin tone"], 2),
    base("🙌", &["raised hands", "hooray"], 1),
    base("🫶", &["heart hands"], 14),
    base("🙏", &["pray", "folded hands", "please", "thanks"], 1),
    tone("\u{1F64F}\u{1F3FB}", "🙏", &["folded hands: light skin tone"], 2),
    tone("\u{1F64F}\u{1F3FC}", "🙏", &["folded hands: medium-light skin tone"], 2),
    tone("\u{1F64F}\u{1F3FD}", "🙏", &["folded hands: medium skin tone"], 2),
    tone("\u{1F64F}\u{1F3FE}", "🙏", &["folded hands: medium-dark skin tone"], 2),
    tone("\u{1F64F}\u{1F3FF}", "🙏", &["folded hands: dark skin tone"], 2),
    base("\u{270D}\u{FE0F}", &["writing hand"], 1),
    base("💪", &["muscle", "flexed biceps", "strong"], 1),
    tone("\u{1F4AA}\u{1F3FB}", "💪", &["flexed biceps: light skin tone"], 2),
    tone("\u{1F4AA}\u{1F3FC}", "💪", &["flexed biceps: medium-light skin tone"], 2),
    tone("\u{1F4AA}\u{1F3FD}", "💪", &["flexed biceps: medium skin tone"], 2),
    tone("\u{1F4AA}\u{1F3FE}", "💪", &["flexed biceps: medium-dark skin tone"], 2),
    tone("\u{1F4AA}\u{1F3FF}", "💪", &["flexed biceps: dark skin tone"], 2),
    // People
    base("🤷", &["shrug", "person shrugging"], 3),
    gendered("\u{1F937}\u{200D}\u{2640}\u{FE0F}", "🤷", &["woman shrugging"], 4),
    gendered("\u{1F937}\u{200D}\u{2642}\u{FE0F}", "🤷", &["man shrugging"], 4),
    base("🤦", &["facepalm", "person facepalming"], 3),
    gendered("\u{1F926}\u{200D}\u{2640}\u{FE0F}", "🤦", &["woman facepalming"], 4),
    gendered("\u{1F926}\u{200D}\u{2642}\u{FE0F}", "🤦", &["man facepalming"], 4),
    base("🙋", &["raising hand", "person raising hand"], 1),
    gendered("\u{1F64B}\u{200D}\u{2640}\u{FE0F}", "🙋", &["woman raising hand"], 4),
    gendered("\u{1F64B}\u{200D}\u{2642}\u{FE0F}", "🙋", &["man raising hand"], 4),
    base("🙆", &["ok person", "person gesturing ok"], 1),
    gendered("\u{1F646}\u{200D}\u{2640}\u{FE0F}", "🙆", &["woman gesturing ok"], 4),
    gendered("\u{1F646}\u{200D}\u{2642}\u{FE0F}", "🙆", &["man gesturing ok"], 4),
    base("🙅", &["no good", "person gesturing no"], 1),
    gendered("\u{1F645}\u{200D}\u{2640}\u{FE0F}", "🙅", &["woman gesturing no"], 4),
    gendered("\u{1F645}\u{200D}\u{2642}\u{FE0F}", "🙅", &["man gesturing no"], 4),
    base("💁", &["information desk person", "person tipping hand"], 1),
    gendered("\u{1F481}\u{200D}\u{2640}\u{FE0F}", "💁", &["woman tipping hand"], 4),
    gendered("\u{1F481}\u{200D}\u{2642}\u{FE0F}", "💁", &["man tipping hand"], 4),
    base("🙇", &["bow", "person bowing"], 1),
    gendered("\u{1F647}\u{200D}\u{2640}\u{FE0F}", "🙇", &["woman bowing"], 4),
    gendered("\u{1F647}\u{200D}\u{2642}\u{FE0F}", "🙇", &["man bowing"], 4),
    base("\u{1F9D1}\u{200D}\u{1F4BB}", &["technologist", "developer"], 12),
    gendered("\u{1F469}\u{200D}\u{1F4BB}", "\u{1F9D1}\u{200D}\u{1F4BB}", &["woman technologist"], 4),
    gendered("\u{1F468}\u{200D}\u{1F4BB}", "\u{1F9D1}\u{200D}\u{1F4BB}", &["man technologist"], 4),
    // Animals and nature
    base("🐶", &["dog", "dog face"], 1),
    base("🐱", &["cat", "cat face"], 1),
    base("🐭", &["mouse", "mouse face"], 1),
    base("🦊", &["fox", "fox face"], 3),
    base("🐻", &["bear"], 1),
    base("🐼", &["panda"], 1),
    base("🐨", &["koala"], 1),
    base("🐯", &["tiger", "tiger face"], 1),
    base("🦁", &["lion", "lion face"], 1),
    base("🐮", &["cow", "cow face"], 1),
    base("🐷", &["pig", "pig face"], 1),
    base("🐸", &["frog"], 1),
    base("🐵", &["monkey face"], 1),
    base("🐔", &["chicken"], 1),
    base("🐧", &["penguin"], 1),
    base("🦉", &["owl"], 3),
    base("🦄", &["unicorn"], 1),
    base("🐝", &["bee", "honeybee"], 1),
    base("🦋", &["butterfly"], 3),
    base("🐢", &["turtle"], 1),
    base("🐍", &["snake"], 1),
    base("🐙", &["octopus"], 1),
    base("🦀", &["crab"], 1),
    base("🐳", &["whale", "spouting whale"], 1),
    base("🐬", &["dolphin"], 1),
    base("🦈", &["shark"], 3),
    base("🦭", &["seal"], 13),
    base("🪼", &["jellyfish"], 15),
    base("🌵", &["cactus"], 1),
    base("🌲", &["evergreen tree"], 1),
    base("🌸", &["cherry blossom"], 1),
    base("🌻", &["sunflower"], 1),
    base("🍀", &["four leaf clover"], 1),
    // Food and drink
    base("🍎", &["apple", "red apple"], 1),
    base("🍌", &["banana"], 1),
    base("🍉", &["watermelon"], 1),
    base("🍓", &["strawberry"], 1),
    base("🫐", &["blueberries"], 13),
    base("🥑", &["avocado"], 3),
    base("\u{1F336}\u{FE0F}", &["hot pepper"], 1),
    base("🥕", &["carrot"], 3),
    base("🍞", &["bread"], 1),
    base("🧀", &["cheese", "cheese wedge"], 1),
    base("🍕", &["pizza"], 1),
    base("🍔", &["hamburger", "burger"], 1),
    base("🌮", &["taco"], 1),
    base("🍣", &["sushi"], 1),
    base("🍜", &["ramen", "steaming bowl"], 1),
    base("🍩", &["doughnut", "donut"], 1),
    base("🍪", &["cookie"], 1),
    base("🎂", &["birthday", "birthday cake"], 1),
    base("☕", &["coffee", "hot beverage"], 1),
    base("🍵", &["tea", "teacup without handle"], 1),
    base("🍺", &["beer", "beer mug"], 1),
    base("🍷", &["wine glass"], 1),
    base("🧋", &["bubble tea"], 13),
    // Activities
    base("🎉", &["tada", "party popper"], 1),
    base("🎊", &["confetti ball"], 1),
    base("🎁", &["gift", "wrapped gift", "present"], 1),
    base("🎈", &["balloon"], 1),
    base("🪅", &["piñata"], 13),
    base("⚽", &["soccer", "soccer ball", "football"], 1),
    base("🏀", &["basketball"], 1),
    base("🎮", &["video game"], 1),
    base("🎲", &["game die"], 1),
    base("🎯", &["dart", "direct hit", "bullseye"], 1),
    base("🎸", &["guitar"], 1),
    base("🎵", &["musical note"], 1),
    base("🏆", &["trophy"], 1),
    base("🥇", &["1st place medal", "gold medal"], 3),
    // Travel and places
    base("🚀", &["rocket"], 1),
    base("\u{2708}\u{FE0F}", &["airplane"], 1),
    base("🚗", &["car", "automobile"], 1),
    base("🚲", &["bike", "bicycle"], 1),
    base("🏠", &["house", "home"], 1),
    base("🌍", &["earth", "globe showing europe-africa"], 1),
    base("🌙", &["crescent moon", "moon"], 1),
    base("\u{2600}\u{FE0F}", &["sun", "sunny"], 1),
    base("⭐", &["star"], 1),
    base("🌈", &["rainbow"], 1),
    base("☔", &["umbrella with rain drops"], 1),
    base("⚡", &["zap", "high voltage", "lightning"], 1),
    base("\u{2744}\u{FE0F}", &["snowflake"], 1),
    base("🌊", &["ocean", "water wave"], 1),
    // Objects
    base("💡", &["bulb", "light bulb", "idea"], 1),
    base("📱", &["iphone", "mobile phone"], 1),
    base("💻", &["computer", "laptop"], 1),
    base("\u{2328}\u{FE0F}", &["keyboard"], 1),
    base("\u{1F5A5}\u{FE0F}", &["desktop computer"], 1),
    base("📷", &["camera"], 1),
    base("🔑", &["key"], 1),
    base("🔒", &["lock", "locked"], 1),
    base("🔓", &["unlock", "unlocked"], 1),
    base("🔔", &["bell"], 1),
    base("📚", &["books"], 1),
    base("📝", &["memo", "note"], 1),
    base("📎", &["paperclip"], 1),
    base("\u{2702}\u{FE0F}", &["scissors"], 1),
    base("\u{1F5D1}\u{FE0F}", &["wastebasket", "trash"], 1),
    base("🔧", &["wrench"], 1),
    base("🔨", &["hammer"], 1),
    base("\u{2699}\u{FE0F}", &["gear", "settings"], 1),
    base("🧪", &["test tube"], 11),
    base("🐛", &["bug"], 1),
    base("🪲", &["beetle"], 13),
    base("📦", &["package"], 1),
    base("🚧", &["construction"], 1),
    // Symbols
    base("✅", &["white check mark", "check mark button", "done"], 1),
    base("❌", &["x", "cross mark"], 1),
    base("❓", &["question", "question mark"], 1),
    base("❗", &["exclamation", "exclamation mark"], 1),
    base("\u{26A0}\u{FE0F}", &["warning"], 1),
    base("🚫", &["no entry sign", "prohibited"], 1),
    base("\u{267B}\u{FE0F}", &["recycle", "recycling symbol"], 1),
    base("➕", &["heavy plus sign", "plus"], 1),
    base("➖", &["heavy minus sign", "minus"], 1),
    base("🆗", &["ok button"], 1),
    base("🆕", &["new", "new button"], 1),
    base("🔴", &["red circle"], 1),
    base("🟢", &["green circle"], 12),
    // Flags
    base("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", &["rainbow flag", "pride"], 4),
    base("\u{1F3F4}\u{200D}\u{2620}\u{FE0F}", &["pirate flag", "jolly roger"], 11),
    base("\u{1F1FA}\u{1F1F8}", &["us", "flag: united states"], 1),
    base("\u{1F1EF}\u{1F1F5}", &["jp", "flag: japan"], 1),
    base("\u{1F1E9}\u{1F1EA}", &["de", "flag: germany"], 1),
    base("\u{1F1EB}\u{1F1F7}", &["fr", "flag: france"], 1),
    base("\u{1F1E7}\u{1F1F7}", &["br", "flag: brazil"], 1),
];
