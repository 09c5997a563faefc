//! Navigation tables compiled into the crate.  These mirror Doxygen's
//! generated `navtree` JavaScript so the index works without any files on
//! disk; `tests/fixtures/` carries the JS they were taken from.

use std::sync::OnceLock;

use super::doc_index::{DocIndex, IndexEntry};

pub const ANALOGY_ASYNC1_GROUP: &str = "group__analogy__lib__async1";

struct StaticEntry {
    name: &'static str,
    target: &'static str,
    children: &'static [StaticEntry],
}

const fn leaf(name: &'static str, target: &'static str) -> StaticEntry {
    StaticEntry {
        name,
        target,
        children: &[],
    }
}

impl StaticEntry {
    fn to_entry(&self) -> IndexEntry {
        IndexEntry::composite(
            self.name,
            self.target,
            self.children.iter().map(StaticEntry::to_entry).collect(),
        )
    }
}

// Rows stay in the order Doxygen listed them.
const A4L_CMD_DESC_FIELDS: &[StaticEntry] = &[
    leaf("chan_descs", "structa4l__cmd__desc.html#a4b5b9d678060dd82afcd2785978279b9"),
    leaf("convert_arg", "structa4l__cmd__desc.html#a94b00ad821842ce595ff74091c0bfb0d"),
    leaf("convert_src", "structa4l__cmd__desc.html#a66cbfe31a41a4d3c80beb8334c4faf0d"),
    leaf("data", "structa4l__cmd__desc.html#a7022dc9b40700146265dae4975e7e8e6"),
    leaf("data_len", "structa4l__cmd__desc.html#a625881dda6bd2d262335cb64531de5bc"),
    leaf("flags", "structa4l__cmd__desc.html#a049dea578027b4f1dd5887435c9869dd"),
    leaf("idx_subd", "structa4l__cmd__desc.html#a469d6ae600095ba9b819f334130521cd"),
    leaf("nb_chan", "structa4l__cmd__desc.html#af6d57561511fb8aac21f0fbef1cba76c"),
    leaf("scan_begin_arg", "structa4l__cmd__desc.html#a00fca89103bdff1b43a371b775e0d4f2"),
    leaf("scan_begin_src", "structa4l__cmd__desc.html#ac4c0ca0d15613a1b8b8ca9c63f95c5a6"),
    leaf("scan_end_arg", "structa4l__cmd__desc.html#a6d52be88498870e2c389d5661cfdcf15"),
    leaf("scan_end_src", "structa4l__cmd__desc.html#aa8f257345897a25f613c4e6568010b3d"),
    leaf("start_arg", "structa4l__cmd__desc.html#ae985bbc8ef49f6c5a2a62cb13119c44b"),
    leaf("start_src", "structa4l__cmd__desc.html#a3df2c7fafa3a45dc4ed3005456868cef"),
    leaf("stop_arg", "structa4l__cmd__desc.html#ade2ff9c2e394ce0f18e3f293b00cb63e"),
    leaf("stop_src", "structa4l__cmd__desc.html#a89b8a0c0cc4937ce414434f140d8bf68"),
];

static ANALOGY_ASYNC1: &[StaticEntry] = &[
    StaticEntry {
        name: "a4l_cmd_desc",
        target: "structa4l__cmd__desc.html",
        children: A4L_CMD_DESC_FIELDS,
    },
    leaf("A4L_CMD_BULK", "group__analogy__lib__async1.html#ga6837957c486eb249b701417ae781523d"),
    leaf("A4L_CMD_SIMUL", "group__analogy__lib__async1.html#ga877d13463216f33d3f74a76073cfaa15"),
    leaf("A4L_CMD_WRITE", "group__analogy__lib__async1.html#gaad8c331fc97e193f4accfe79f9e82877"),
    leaf("AREF", "group__analogy__lib__async1.html#ga038455ccc5082f8846dfe18d6dae9330"),
    leaf("AREF_COMMON", "group__analogy__lib__async1.html#ga5b1c534ba73e977e8aead43ad6c30e99"),
    leaf("AREF_DIFF", "group__analogy__lib__async1.html#gaec78fb06568eab385ed4872eecddad53"),
    leaf("AREF_GROUND", "group__analogy__lib__async1.html#gaf4213b511f4cf8237b72bbb023bd0734"),
    leaf("AREF_OTHER", "group__analogy__lib__async1.html#ga0c559d5125ee349b6ca375d57377066b"),
    leaf("CHAN", "group__analogy__lib__async1.html#ga2ea3059ec078a38795989d303036226b"),
    leaf("FLAGS", "group__analogy__lib__async1.html#gac4bedb3d2db5d378dd9685fdd5f74db6"),
    leaf("PACK", "group__analogy__lib__async1.html#ga774837c170ab93ce7e53b71d0ced735f"),
    leaf("PACK_FLAGS", "group__analogy__lib__async1.html#ga59ae630a4d0933e6416a25bb28720972"),
    leaf("RNG", "group__analogy__lib__async1.html#ga3f2f598789c55c83c65d7f395918a5a9"),
    leaf("TRIG_COUNT", "group__analogy__lib__async1.html#ga5d237ebfb439ecb144cf0b2ddba73848"),
    leaf("TRIG_EXT", "group__analogy__lib__async1.html#ga75b66f043b4636fbc598d43f14df5a5d"),
    leaf("TRIG_FOLLOW", "group__analogy__lib__async1.html#ga1fb4b9b153dc9bb3ee3127144b21ee53"),
    leaf("TRIG_INT", "group__analogy__lib__async1.html#ga9cf1b9d87162ed1050c9772cb3c7e53e"),
    leaf("TRIG_NONE", "group__analogy__lib__async1.html#gafc8fd41e49da27d5379a1b560821d5b7"),
    leaf("TRIG_NOW", "group__analogy__lib__async1.html#gabe9879c2801e26d95673b45dbd04c6c8"),
    leaf("TRIG_OTHER", "group__analogy__lib__async1.html#ga718e0eb0f96752bfc48c9089d997920c"),
    leaf("TRIG_ROUND_DOWN", "group__analogy__lib__async1.html#ga50c3bcbe815a1e0ae74bdab952951057"),
    leaf("TRIG_ROUND_MASK", "group__analogy__lib__async1.html#gad8221fb60c33a0a657afa01be826ef3a"),
    leaf("TRIG_ROUND_NEAREST", "group__analogy__lib__async1.html#ga445f702491148979ffca8185822098b2"),
    leaf("TRIG_ROUND_UP", "group__analogy__lib__async1.html#gafbc5d6b6b36c783d83480644675e773e"),
    leaf("TRIG_ROUND_UP_NEXT", "group__analogy__lib__async1.html#ga65cb9a7c636f0e3dd423171815de0ebf"),
    leaf("TRIG_TIME", "group__analogy__lib__async1.html#ga9ddc8d7c5e0ce1b00e62da6a673b9468"),
    leaf("TRIG_TIMER", "group__analogy__lib__async1.html#gaa8dfbe568cb81f66fe77d574616e378d"),
    leaf("TRIG_WAKE_EOS", "group__analogy__lib__async1.html#gadd809765a503cc0180aed65543cfba42"),
    leaf("a4l_get_bufsize", "group__analogy__lib__async1.html#gad6a58d164ad6edccf9ef213778102ca0"),
    leaf("a4l_mark_bufrw", "group__analogy__lib__async1.html#gaa95b4dc428000e0b41047c3ed4c5b61c"),
    leaf("a4l_mmap", "group__analogy__lib__async1.html#gad1ba6a0d5954e5e68365a206d55ee251"),
    leaf("a4l_poll", "group__analogy__lib__async1.html#ga43ab969b00aae973ef4b67c234b17720"),
    leaf("a4l_set_bufsize", "group__analogy__lib__async1.html#ga247528c4d75db12782aad05b41faf394"),
    leaf("a4l_snd_cancel", "group__analogy__lib__async1.html#ga70dd6f96f60e9c839eb1ffc8538fc6c7"),
    leaf("a4l_snd_command", "group__analogy__lib__async1.html#gae802726a40cc65522546fb2f75cd5f3f"),
];

/// Build the Analogy asynchronous acquisition group from the literal table.
/// Every call builds a fresh value that compares equal to every other.
pub fn load() -> DocIndex {
    DocIndex::from_trusted(
        ANALOGY_ASYNC1_GROUP,
        ANALOGY_ASYNC1.iter().map(StaticEntry::to_entry).collect(),
    )
}

/// Shared copy of `load()` for readers that don't want their own.
pub fn builtin() -> &'static DocIndex {
    static BUILTIN: OnceLock<DocIndex> = OnceLock::new();
    BUILTIN.get_or_init(load)
}
