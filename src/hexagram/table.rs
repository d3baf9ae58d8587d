//! Static hexagram reference data
//!
//! `HEXAGRAMS` holds the 64 canonical symbols in King Wen order (entry i has
//! number i + 1). `KING_WEN_FROM_FU_XI` maps the Fu Xi binary ordering to
//! King Wen numbers. Both tables assume the same bit convention: bottom line
//! is the least significant bit, 1 = Yang. The two tables are coupled; a
//! different bit order would need a re-derived permutation.

use crate::core::types::Language;
use serde::Serialize;

/// One of the 64 canonical hexagrams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen sequence number, 1-64
    pub number: u8,
    pub name_vi: &'static str,
    pub name_en: &'static str,
    /// Phonetic transliteration (pinyin)
    pub pinyin: &'static str,
    pub judgment_vi: &'static str,
    pub judgment_en: &'static str,
    pub image_vi: &'static str,
    pub image_en: &'static str,
}

impl Hexagram {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => self.name_vi,
            Language::English => self.name_en,
        }
    }

    pub fn judgment(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => self.judgment_vi,
            Language::English => self.judgment_en,
        }
    }

    pub fn image(&self, language: Language) -> &'static str {
        match language {
            Language::Vietnamese => self.image_vi,
            Language::English => self.image_en,
        }
    }
}

/// Fu Xi sequence number (six polarity bits, bottom = LSB) -> King Wen number.
///
/// Index 0 is all Yin (Khôn, #2), index 63 all Yang (Càn, #1). Every entry
/// was cross-checked against the trigram composition of its King Wen symbol;
/// a transcription error here silently misidentifies casts.
pub static KING_WEN_FROM_FU_XI: [u8; 64] = [
    2, 24, 7, 19, 15, 36, 46, 11, // 0-7: upper trigram Khôn
    16, 51, 40, 54, 62, 55, 32, 34, // 8-15: upper trigram Chấn
    8, 3, 29, 60, 39, 63, 48, 5, // 16-23: upper trigram Khảm
    45, 17, 47, 58, 31, 49, 28, 43, // 24-31: upper trigram Đoài
    23, 27, 4, 41, 52, 22, 18, 26, // 32-39: upper trigram Cấn
    35, 21, 64, 38, 56, 30, 50, 14, // 40-47: upper trigram Ly
    20, 42, 59, 61, 53, 37, 57, 9, // 48-55: upper trigram Tốn
    12, 25, 6, 10, 33, 13, 44, 1, // 56-63: upper trigram Càn
];

/// The 64 hexagrams in King Wen order.
pub static HEXAGRAMS: [Hexagram; 64] = [
    Hexagram {
        number: 1,
        name_vi: "Thuần Càn",
        name_en: "The Creative",
        pinyin: "Qian",
        judgment_vi: "Càn: nguyên thủy, hanh thông, lợi ích, chính bền.",
        judgment_en: "The Creative works sublime success, furthering through perseverance.",
        image_vi: "Trời vận hành mạnh mẽ; người quân tử tự cường không nghỉ.",
        image_en: "The movement of heaven is full of power; the superior man makes himself strong and untiring.",
    },
    Hexagram {
        number: 2,
        name_vi: "Thuần Khôn",
        name_en: "The Receptive",
        pinyin: "Kun",
        judgment_vi: "Khôn: hanh thông, lợi về sự chính bền của con ngựa cái.",
        judgment_en: "The Receptive brings sublime success, furthering through the perseverance of a mare.",
        image_vi: "Đất dày nâng đỡ muôn vật; người quân tử lấy đức dày mà chở muôn vật.",
        image_en: "The earth's condition is receptive devotion; the superior man carries the outer world with breadth of character.",
    },
    Hexagram {
        number: 3,
        name_vi: "Thủy Lôi Truân",
        name_en: "Difficulty at the Beginning",
        pinyin: "Zhun",
        judgment_vi: "Truân: lúc đầu gian nan, hanh thông nhờ chính bền; nên lập người giúp đỡ.",
        judgment_en: "Difficulty at the beginning works supreme success; it furthers one to appoint helpers.",
        image_vi: "Mây và sấm; người quân tử gỡ rối lập trật tự.",
        image_en: "Clouds and thunder; the superior man brings order out of confusion.",
    },
    Hexagram {
        number: 4,
        name_vi: "Sơn Thủy Mông",
        name_en: "Youthful Folly",
        pinyin: "Meng",
        judgment_vi: "Mông: trẻ dại mà hanh thông; không phải ta cầu kẻ ấu trĩ, kẻ ấu trĩ cầu ta.",
        judgment_en: "Youthful folly has success; it is not I who seek the young fool, the young fool seeks me.",
        image_vi: "Suối phun dưới chân núi; người quân tử nuôi đức bằng sự cẩn trọng.",
        image_en: "A spring wells up at the foot of the mountain; the superior man fosters his character by thoroughness.",
    },
    Hexagram {
        number: 5,
        name_vi: "Thủy Thiên Nhu",
        name_en: "Waiting",
        pinyin: "Xu",
        judgment_vi: "Nhu: chờ đợi với lòng thành thì sáng sủa hanh thông; chính bền thì tốt.",
        judgment_en: "Waiting with sincerity brings light and success; perseverance brings good fortune.",
        image_vi: "Mây lên trời; người quân tử ăn uống yến vui mà chờ thời.",
        image_en: "Clouds rise up to heaven; the superior man eats and drinks, is joyous and of good cheer.",
    },
    Hexagram {
        number: 6,
        name_vi: "Thiên Thủy Tụng",
        name_en: "Conflict",
        pinyin: "Song",
        judgment_vi: "Tụng: tranh chấp; dè chừng nửa chừng thì tốt, theo đến cùng thì xấu.",
        judgment_en: "Conflict: a cautious halt halfway brings good fortune, going through to the end brings misfortune.",
        image_vi: "Trời với nước đi ngược nhau; người quân tử làm việc gì cũng tính kỹ từ đầu.",
        image_en: "Heaven and water go their opposite ways; the superior man carefully considers the beginning in all he does.",
    },
    Hexagram {
        number: 7,
        name_vi: "Địa Thủy Sư",
        name_en: "The Army",
        pinyin: "Shi",
        judgment_vi: "Sư: quân lữ cần chính bền và người lão luyện; tốt lành, không lỗi.",
        judgment_en: "The army needs perseverance and a strong man; good fortune without blame.",
        image_vi: "Trong đất có nước; người quân tử bao dung dân mà nuôi chứa quần chúng.",
        image_en: "In the middle of the earth is water; the superior man increases his masses by generosity toward the people.",
    },
    Hexagram {
        number: 8,
        name_vi: "Thủy Địa Tỷ",
        name_en: "Holding Together",
        pinyin: "Bi",
        judgment_vi: "Tỷ: gần gũi nương tựa thì tốt; kẻ chưa yên dần dần tìm đến.",
        judgment_en: "Holding together brings good fortune; those who are uncertain gradually join.",
        image_vi: "Trên đất có nước; tiên vương dựng muôn nước, thân với chư hầu.",
        image_en: "On the earth is water; the kings of old granted fiefs and cultivated friendly relations.",
    },
    Hexagram {
        number: 9,
        name_vi: "Phong Thiên Tiểu Súc",
        name_en: "The Taming Power of the Small",
        pinyin: "Xiao Chu",
        judgment_vi: "Tiểu Súc: chứa nhỏ mà hanh thông; mây dày mà chưa mưa ở cõi tây.",
        judgment_en: "The small taming power has success; dense clouds, no rain from our western region.",
        image_vi: "Gió đi trên trời; người quân tử trau dồi văn đức.",
        image_en: "The wind drives across heaven; the superior man refines the outward aspect of his nature.",
    },
    Hexagram {
        number: 10,
        name_vi: "Thiên Trạch Lý",
        name_en: "Treading",
        pinyin: "Lu",
        judgment_vi: "Lý: giẫm đuôi cọp mà cọp không cắn; hanh thông.",
        judgment_en: "Treading upon the tail of the tiger; it does not bite the man. Success.",
        image_vi: "Trên trời dưới đầm; người quân tử phân định trên dưới, yên lòng dân.",
        image_en: "Heaven above, the lake below; the superior man discriminates between high and low.",
    },
    Hexagram {
        number: 11,
        name_vi: "Địa Thiên Thái",
        name_en: "Peace",
        pinyin: "Tai",
        judgment_vi: "Thái: cái nhỏ đi, cái lớn lại; tốt lành hanh thông.",
        judgment_en: "Peace: the small departs, the great approaches. Good fortune and success.",
        image_vi: "Trời đất giao hòa; bậc vua noi theo mà điều hòa đạo trời đất.",
        image_en: "Heaven and earth unite; the ruler divides and completes the course of heaven and earth.",
    },
    Hexagram {
        number: 12,
        name_vi: "Thiên Địa Bĩ",
        name_en: "Standstill",
        pinyin: "Pi",
        judgment_vi: "Bĩ: bế tắc; cái lớn đi, cái nhỏ lại; không lợi cho sự chính bền của người quân tử.",
        judgment_en: "Standstill: the great departs, the small approaches; evil people do not further the perseverance of the superior man.",
        image_vi: "Trời đất không giao; người quân tử thu mình giữ đức để tránh nạn.",
        image_en: "Heaven and earth do not unite; the superior man falls back upon his inner worth to escape the difficulties.",
    },
    Hexagram {
        number: 13,
        name_vi: "Thiên Hỏa Đồng Nhân",
        name_en: "Fellowship with Men",
        pinyin: "Tong Ren",
        judgment_vi: "Đồng Nhân: hòa đồng nơi rộng rãi thì hanh thông; lợi cho việc vượt sông lớn.",
        judgment_en: "Fellowship with men in the open: success; it furthers one to cross the great water.",
        image_vi: "Trời cùng với lửa; người quân tử phân loại sự vật, xét rõ tông tộc.",
        image_en: "Heaven together with fire; the superior man organizes the clans and makes distinctions between things.",
    },
    Hexagram {
        number: 14,
        name_vi: "Hỏa Thiên Đại Hữu",
        name_en: "Possession in Great Measure",
        pinyin: "Da You",
        judgment_vi: "Đại Hữu: có lớn; cả hanh thông.",
        judgment_en: "Possession in great measure: supreme success.",
        image_vi: "Lửa ở trên trời; người quân tử ngăn điều ác, phát huy điều thiện.",
        image_en: "Fire in heaven above; the superior man curbs evil and furthers good.",
    },
    Hexagram {
        number: 15,
        name_vi: "Địa Sơn Khiêm",
        name_en: "Modesty",
        pinyin: "Qian",
        judgment_vi: "Khiêm: khiêm nhường thì hanh thông; người quân tử giữ được trọn vẹn.",
        judgment_en: "Modesty creates success; the superior man carries things through.",
        image_vi: "Trong đất có núi; người quân tử bớt chỗ thừa, bù chỗ thiếu.",
        image_en: "Within the earth, a mountain; the superior man reduces that which is too much and augments that which is too little.",
    },
    Hexagram {
        number: 16,
        name_vi: "Lôi Địa Dự",
        name_en: "Enthusiasm",
        pinyin: "Yu",
        judgment_vi: "Dự: hứng khởi; lợi cho việc lập hầu, ra quân.",
        judgment_en: "Enthusiasm: it furthers one to install helpers and to set armies marching.",
        image_vi: "Sấm ra khỏi đất vang động; tiên vương làm nhạc tôn sùng công đức.",
        image_en: "Thunder comes resounding out of the earth; the ancient kings made music in order to honor merit.",
    },
    Hexagram {
        number: 17,
        name_vi: "Trạch Lôi Tùy",
        name_en: "Following",
        pinyin: "Sui",
        judgment_vi: "Tùy: thuận theo thì cả hanh thông; chính bền thì lợi, không lỗi.",
        judgment_en: "Following has supreme success; perseverance furthers, no blame.",
        image_vi: "Sấm trong lòng đầm; người quân tử trời tối thì vào nhà nghỉ ngơi.",
        image_en: "Thunder in the middle of the lake; the superior man at nightfall goes indoors for rest and recuperation.",
    },
    Hexagram {
        number: 18,
        name_vi: "Sơn Phong Cổ",
        name_en: "Work on What Has Been Spoiled",
        pinyin: "Gu",
        judgment_vi: "Cổ: sửa điều đã hỏng thì cả hanh thông; lợi cho việc vượt sông lớn.",
        judgment_en: "Work on what has been spoiled has supreme success; it furthers one to cross the great water.",
        image_vi: "Gió thổi dưới núi; người quân tử chấn hưng dân, nuôi dưỡng đức.",
        image_en: "The wind blows low on the mountain; the superior man stirs up the people and strengthens their spirit.",
    },
    Hexagram {
        number: 19,
        name_vi: "Địa Trạch Lâm",
        name_en: "Approach",
        pinyin: "Lin",
        judgment_vi: "Lâm: tới gần thì cả hanh thông, chính bền thì lợi; đến tháng tám sẽ có điều xấu.",
        judgment_en: "Approach has supreme success; perseverance furthers. When the eighth month comes, there will be misfortune.",
        image_vi: "Đất ở trên đầm; người quân tử dạy dỗ không mỏi, bao dung giữ dân không bờ bến.",
        image_en: "The earth above the lake; the superior man is inexhaustible in his will to teach.",
    },
    Hexagram {
        number: 20,
        name_vi: "Phong Địa Quán",
        name_en: "Contemplation",
        pinyin: "Guan",
        judgment_vi: "Quán: đã rửa tay mà chưa dâng lễ; lòng thành kính khiến người ngưỡng trông.",
        judgment_en: "Contemplation: the ablution has been made, but not yet the offering; full of trust they look up to him.",
        image_vi: "Gió đi trên đất; tiên vương xem xét bốn phương, quan sát dân mà đặt lời dạy.",
        image_en: "The wind blows over the earth; the kings of old visited the regions of the world and gave instruction.",
    },
    Hexagram {
        number: 21,
        name_vi: "Hỏa Lôi Phệ Hạp",
        name_en: "Biting Through",
        pinyin: "Shi He",
        judgment_vi: "Phệ Hạp: cắn mà hợp lại thì hanh thông; lợi cho việc dùng hình ngục.",
        judgment_en: "Biting through has success; it is favorable to let justice be administered.",
        image_vi: "Sấm chớp; tiên vương làm sáng hình phạt, nghiêm chỉnh pháp luật.",
        image_en: "Thunder and lightning; the kings of old made firm the laws through clearly defined penalties.",
    },
    Hexagram {
        number: 22,
        name_vi: "Sơn Hỏa Bí",
        name_en: "Grace",
        pinyin: "Bi",
        judgment_vi: "Bí: trang sức thì hanh thông; việc nhỏ thì nên tiến hành.",
        judgment_en: "Grace has success; in small matters it is favorable to undertake something.",
        image_vi: "Lửa dưới chân núi; người quân tử làm sáng việc thường, không dám quyết việc ngục hình.",
        image_en: "Fire at the foot of the mountain; the superior man clears up current affairs but dares not decide controversial issues.",
    },
    Hexagram {
        number: 23,
        name_vi: "Sơn Địa Bác",
        name_en: "Splitting Apart",
        pinyin: "Bo",
        judgment_vi: "Bác: tan rã; không lợi cho việc đi đâu.",
        judgment_en: "Splitting apart: it does not further one to go anywhere.",
        image_vi: "Núi tựa trên đất; người trên hậu đãi kẻ dưới thì nhà mới yên.",
        image_en: "The mountain rests on the earth; those above ensure their position only by giving generously to those below.",
    },
    Hexagram {
        number: 24,
        name_vi: "Địa Lôi Phục",
        name_en: "Return",
        pinyin: "Fu",
        judgment_vi: "Phục: trở lại thì hanh thông; ra vào không tật bệnh, bảy ngày thì trở lại.",
        judgment_en: "Return: success. Going out and coming in without error; on the seventh day comes return.",
        image_vi: "Sấm ở trong đất; tiên vương ngày đông chí đóng cửa ải, nghỉ ngơi tĩnh dưỡng.",
        image_en: "Thunder within the earth; the kings of old closed the passes at the time of solstice.",
    },
    Hexagram {
        number: 25,
        name_vi: "Thiên Lôi Vô Vọng",
        name_en: "Innocence",
        pinyin: "Wu Wang",
        judgment_vi: "Vô Vọng: không càn bậy thì cả hanh thông; không chính thì có họa.",
        judgment_en: "Innocence: supreme success; if someone is not as he should be, he has misfortune.",
        image_vi: "Dưới trời sấm động; tiên vương thuận thời nuôi dưỡng muôn vật.",
        image_en: "Under heaven thunder rolls; the kings of old fostered and nourished all beings in accord with the time.",
    },
    Hexagram {
        number: 26,
        name_vi: "Sơn Thiên Đại Súc",
        name_en: "The Taming Power of the Great",
        pinyin: "Da Chu",
        judgment_vi: "Đại Súc: chứa lớn; chính bền thì lợi, không ăn ở nhà thì tốt.",
        judgment_en: "The great taming power: perseverance furthers; not eating at home brings good fortune.",
        image_vi: "Trời trong núi; người quân tử học lời xưa việc cũ để nuôi đức mình.",
        image_en: "Heaven within the mountain; the superior man acquaints himself with many sayings of antiquity to strengthen his character.",
    },
    Hexagram {
        number: 27,
        name_vi: "Sơn Lôi Di",
        name_en: "The Corners of the Mouth",
        pinyin: "Yi",
        judgment_vi: "Di: nuôi dưỡng; chính bền thì tốt, xét xem cách nuôi người và tự nuôi mình.",
        judgment_en: "Nourishment: perseverance brings good fortune; pay heed to the providing of nourishment.",
        image_vi: "Dưới núi có sấm; người quân tử thận trọng lời nói, tiết độ ăn uống.",
        image_en: "At the foot of the mountain, thunder; the superior man is careful of his words and temperate in eating and drinking.",
    },
    Hexagram {
        number: 28,
        name_vi: "Trạch Phong Đại Quá",
        name_en: "Preponderance of the Great",
        pinyin: "Da Guo",
        judgment_vi: "Đại Quá: cột nóc cong oằn; lợi cho việc có nơi để đi, hanh thông.",
        judgment_en: "The ridgepole sags to the breaking point; it furthers one to have somewhere to go.",
        image_vi: "Đầm dâng ngập cây; người quân tử đứng một mình không sợ, lánh đời không buồn.",
        image_en: "The lake rises above the trees; the superior man, when he stands alone, is unconcerned.",
    },
    Hexagram {
        number: 29,
        name_vi: "Thuần Khảm",
        name_en: "The Abysmal",
        pinyin: "Kan",
        judgment_vi: "Khảm: hiểm trùng điệp; giữ lòng thành thì trong tâm hanh thông.",
        judgment_en: "The Abysmal repeated: if you are sincere, you have success in your heart.",
        image_vi: "Nước chảy mãi không ngừng; người quân tử giữ đức hằng thường, tập việc dạy dỗ.",
        image_en: "Water flows on uninterruptedly; the superior man walks in lasting virtue and carries on the business of teaching.",
    },
    Hexagram {
        number: 30,
        name_vi: "Thuần Ly",
        name_en: "The Clinging",
        pinyin: "Li",
        judgment_vi: "Ly: bám sáng; chính bền thì lợi, nuôi trâu cái thì tốt.",
        judgment_en: "The Clinging: perseverance furthers; care of the cow brings good fortune.",
        image_vi: "Ánh sáng nổi lên hai lần; bậc đại nhân nối ánh sáng chiếu khắp bốn phương.",
        image_en: "That which is bright rises twice; the great man continues the work of nature in the human world.",
    },
    Hexagram {
        number: 31,
        name_vi: "Trạch Sơn Hàm",
        name_en: "Influence",
        pinyin: "Xian",
        judgment_vi: "Hàm: cảm ứng thì hanh thông; chính bền thì lợi, cưới vợ thì tốt.",
        judgment_en: "Influence: success; taking a maiden to wife brings good fortune.",
        image_vi: "Trên núi có đầm; người quân tử lấy lòng trống rỗng mà tiếp nhận người.",
        image_en: "A lake on the mountain; the superior man encourages people to approach him by his readiness to receive them.",
    },
    Hexagram {
        number: 32,
        name_vi: "Lôi Phong Hằng",
        name_en: "Duration",
        pinyin: "Heng",
        judgment_vi: "Hằng: bền lâu thì hanh thông, không lỗi; chính bền thì lợi.",
        judgment_en: "Duration: success, no blame; perseverance furthers.",
        image_vi: "Sấm với gió; người quân tử đứng vững không đổi phương hướng.",
        image_en: "Thunder and wind; the superior man stands firm and does not change his direction.",
    },
    Hexagram {
        number: 33,
        name_vi: "Thiên Sơn Độn",
        name_en: "Retreat",
        pinyin: "Dun",
        judgment_vi: "Độn: lui tránh thì hanh thông; việc nhỏ chính bền thì lợi.",
        judgment_en: "Retreat: success; in what is small, perseverance furthers.",
        image_vi: "Núi ở dưới trời; người quân tử xa kẻ tiểu nhân, không ghét mà nghiêm.",
        image_en: "Mountain under heaven; the superior man keeps the inferior man at a distance, not angrily but with reserve.",
    },
    Hexagram {
        number: 34,
        name_vi: "Lôi Thiên Đại Tráng",
        name_en: "The Power of the Great",
        pinyin: "Da Zhuang",
        judgment_vi: "Đại Tráng: mạnh lớn; chính bền thì lợi.",
        judgment_en: "The power of the great: perseverance furthers.",
        image_vi: "Sấm ở trên trời; người quân tử không làm điều trái lễ.",
        image_en: "Thunder in heaven above; the superior man does not tread upon paths that do not accord with established order.",
    },
    Hexagram {
        number: 35,
        name_vi: "Hỏa Địa Tấn",
        name_en: "Progress",
        pinyin: "Jin",
        judgment_vi: "Tấn: tiến lên; bậc hầu được ban ngựa nhiều, ngày tiếp ba lần.",
        judgment_en: "Progress: the powerful prince is honored with horses in large numbers.",
        image_vi: "Mặt trời lên khỏi mặt đất; người quân tử tự làm sáng đức sáng của mình.",
        image_en: "The sun rises over the earth; the superior man himself brightens his bright virtue.",
    },
    Hexagram {
        number: 36,
        name_vi: "Địa Hỏa Minh Di",
        name_en: "Darkening of the Light",
        pinyin: "Ming Yi",
        judgment_vi: "Minh Di: ánh sáng bị tổn thương; trong gian nan chính bền thì lợi.",
        judgment_en: "Darkening of the light: in adversity it furthers one to be persevering.",
        image_vi: "Ánh sáng lặn vào trong đất; người quân tử che bớt sáng mà vẫn sáng.",
        image_en: "The light has sunk into the earth; the superior man veils his light, yet still shines.",
    },
    Hexagram {
        number: 37,
        name_vi: "Phong Hỏa Gia Nhân",
        name_en: "The Family",
        pinyin: "Jia Ren",
        judgment_vi: "Gia Nhân: người nhà; sự chính bền của người nữ thì lợi.",
        judgment_en: "The family: the perseverance of the woman furthers.",
        image_vi: "Gió từ lửa sinh ra; người quân tử nói có thật, làm có thường.",
        image_en: "Wind comes forth from fire; the superior man has substance in his words and duration in his way of life.",
    },
    Hexagram {
        number: 38,
        name_vi: "Hỏa Trạch Khuê",
        name_en: "Opposition",
        pinyin: "Kui",
        judgment_vi: "Khuê: trái lìa; việc nhỏ thì tốt.",
        judgment_en: "Opposition: in small matters, good fortune.",
        image_vi: "Trên lửa dưới đầm; người quân tử hòa đồng mà vẫn giữ chỗ khác biệt.",
        image_en: "Above, fire; below, the lake; the superior man retains his individuality in the midst of fellowship.",
    },
    Hexagram {
        number: 39,
        name_vi: "Thủy Sơn Kiển",
        name_en: "Obstruction",
        pinyin: "Jian",
        judgment_vi: "Kiển: trắc trở; lợi hướng tây nam, bất lợi hướng đông bắc; nên gặp bậc đại nhân.",
        judgment_en: "Obstruction: the southwest furthers, the northeast does not; it furthers one to see the great man.",
        image_vi: "Nước ở trên núi; người quân tử quay về xét mình mà sửa đức.",
        image_en: "Water on the mountain; the superior man turns his attention to himself and molds his character.",
    },
    Hexagram {
        number: 40,
        name_vi: "Lôi Thủy Giải",
        name_en: "Deliverance",
        pinyin: "Jie",
        judgment_vi: "Giải: cởi mở; lợi hướng tây nam; không còn việc phải đi thì trở về là tốt.",
        judgment_en: "Deliverance: the southwest furthers; if there is nothing more to attend to, return brings good fortune.",
        image_vi: "Sấm mưa nổi dậy; người quân tử tha lỗi nhỏ, khoan thứ tội.",
        image_en: "Thunder and rain set in; the superior man pardons mistakes and forgives misdeeds.",
    },
    Hexagram {
        number: 41,
        name_vi: "Sơn Trạch Tổn",
        name_en: "Decrease",
        pinyin: "Sun",
        judgment_vi: "Tổn: bớt đi mà có lòng thành thì rất tốt, không lỗi.",
        judgment_en: "Decrease combined with sincerity brings about supreme good fortune without blame.",
        image_vi: "Dưới núi có đầm; người quân tử dằn cơn giận, chặn lòng dục.",
        image_en: "At the foot of the mountain, the lake; the superior man controls his anger and restrains his instincts.",
    },
    Hexagram {
        number: 42,
        name_vi: "Phong Lôi Ích",
        name_en: "Increase",
        pinyin: "Yi",
        judgment_vi: "Ích: thêm lên; lợi cho việc có nơi để đi, vượt sông lớn.",
        judgment_en: "Increase: it furthers one to undertake something and to cross the great water.",
        image_vi: "Gió và sấm; người quân tử thấy điều thiện thì theo, có lỗi thì sửa.",
        image_en: "Wind and thunder; when the superior man sees good, he imitates it; when he has faults, he rids himself of them.",
    },
    Hexagram {
        number: 43,
        name_vi: "Trạch Thiên Quải",
        name_en: "Breakthrough",
        pinyin: "Guai",
        judgment_vi: "Quải: quyết liệt; phải tuyên cáo rõ ràng nơi sân vua, thành thật hô lên rằng có nguy.",
        judgment_en: "Breakthrough: one must resolutely make the matter known at the court of the king.",
        image_vi: "Đầm dâng lên tận trời; người quân tử ban ơn xuống dưới, không tự kể công.",
        image_en: "The lake has risen up to heaven; the superior man dispenses riches downward and refrains from resting on his virtue.",
    },
    Hexagram {
        number: 44,
        name_vi: "Thiên Phong Cấu",
        name_en: "Coming to Meet",
        pinyin: "Gou",
        judgment_vi: "Cấu: gặp gỡ; người con gái cứng mạnh, chớ lấy làm vợ.",
        judgment_en: "Coming to meet: the maiden is powerful; one should not marry such a maiden.",
        image_vi: "Dưới trời có gió; bậc vua ban mệnh lệnh truyền khắp bốn phương.",
        image_en: "Under heaven, wind; the prince issues his commands and proclaims them to the four quarters.",
    },
    Hexagram {
        number: 45,
        name_vi: "Trạch Địa Tụy",
        name_en: "Gathering Together",
        pinyin: "Cui",
        judgment_vi: "Tụy: nhóm họp thì hanh thông; vua đến nhà tông miếu.",
        judgment_en: "Gathering together: success; the king approaches his temple.",
        image_vi: "Đầm ở trên đất; người quân tử sửa sang khí giới phòng sự bất ngờ.",
        image_en: "The lake rises above the earth; the superior man renews his weapons to meet the unforeseen.",
    },
    Hexagram {
        number: 46,
        name_vi: "Địa Phong Thăng",
        name_en: "Pushing Upward",
        pinyin: "Sheng",
        judgment_vi: "Thăng: đi lên thì cả hanh thông; nên gặp bậc đại nhân, chớ lo.",
        judgment_en: "Pushing upward has supreme success; one must see the great man.",
        image_vi: "Trong đất mọc cây; người quân tử góp điều nhỏ mà thành cao lớn.",
        image_en: "Within the earth, wood grows; the superior man heaps up small things to achieve something high and great.",
    },
    Hexagram {
        number: 47,
        name_vi: "Trạch Thủy Khốn",
        name_en: "Oppression",
        pinyin: "Kun",
        judgment_vi: "Khốn: cùng khốn mà hanh thông; bậc đại nhân chính bền thì tốt; nói ra không ai tin.",
        judgment_en: "Oppression: success through perseverance for the great man; when one has something to say, it is not believed.",
        image_vi: "Đầm không có nước; người quân tử liều thân để đạt chí nguyện.",
        image_en: "There is no water in the lake; the superior man stakes his life on following his will.",
    },
    Hexagram {
        number: 48,
        name_vi: "Thủy Phong Tỉnh",
        name_en: "The Well",
        pinyin: "Jing",
        judgment_vi: "Tỉnh: giếng nước; ấp có thể dời mà giếng không thể dời.",
        judgment_en: "The well: the town may be changed, but the well cannot be changed.",
        image_vi: "Nước ở trên cây; người quân tử khuyên dân chăm việc, giúp đỡ lẫn nhau.",
        image_en: "Water over wood; the superior man encourages the people at their work and exhorts them to help one another.",
    },
    Hexagram {
        number: 49,
        name_vi: "Trạch Hỏa Cách",
        name_en: "Revolution",
        pinyin: "Ge",
        judgment_vi: "Cách: thay đổi; đến ngày của nó mới được tin; cả hanh thông, chính bền thì lợi.",
        judgment_en: "Revolution: on your own day you are believed; supreme success.",
        image_vi: "Trong đầm có lửa; người quân tử làm lịch số, xét rõ bốn mùa.",
        image_en: "Fire in the lake; the superior man sets the calendar in order and makes the seasons clear.",
    },
    Hexagram {
        number: 50,
        name_vi: "Hỏa Phong Đỉnh",
        name_en: "The Cauldron",
        pinyin: "Ding",
        judgment_vi: "Đỉnh: cái vạc; cả tốt lành, hanh thông.",
        judgment_en: "The cauldron: supreme good fortune, success.",
        image_vi: "Lửa trên cây; người quân tử giữ ngôi vị cho chính để định mệnh trời.",
        image_en: "Fire over wood; the superior man consolidates his fate by making his position correct.",
    },
    Hexagram {
        number: 51,
        name_vi: "Thuần Chấn",
        name_en: "The Arousing",
        pinyin: "Zhen",
        judgment_vi: "Chấn: sấm động thì hanh thông; sấm đến nơm nớp, rồi cười nói ha ha.",
        judgment_en: "Shock brings success; shock comes, then laughing words.",
        image_vi: "Sấm chồng sấm; người quân tử lo sợ mà sửa mình xét lỗi.",
        image_en: "Thunder repeated; the superior man sets his life in order and examines himself in fear and trembling.",
    },
    Hexagram {
        number: 52,
        name_vi: "Thuần Cấn",
        name_en: "Keeping Still",
        pinyin: "Gen",
        judgment_vi: "Cấn: dừng nơi lưng, không thấy thân mình; đi giữa sân không thấy người; không lỗi.",
        judgment_en: "Keeping still: keeping his back still so that he no longer feels his body; no blame.",
        image_vi: "Núi liền núi; người quân tử nghĩ không vượt ra ngoài địa vị mình.",
        image_en: "Mountains standing close together; the superior man does not permit his thoughts to go beyond his situation.",
    },
    Hexagram {
        number: 53,
        name_vi: "Phong Sơn Tiệm",
        name_en: "Development",
        pinyin: "Jian",
        judgment_vi: "Tiệm: tiến dần; con gái về nhà chồng thì tốt; chính bền thì lợi.",
        judgment_en: "Development: the maiden is given in marriage; good fortune, perseverance furthers.",
        image_vi: "Trên núi có cây; người quân tử ở đức hiền mà làm tốt phong tục.",
        image_en: "On the mountain, a tree; the superior man abides in dignity and virtue to improve the mores.",
    },
    Hexagram {
        number: 54,
        name_vi: "Lôi Trạch Quy Muội",
        name_en: "The Marrying Maiden",
        pinyin: "Gui Mei",
        judgment_vi: "Quy Muội: em gái về nhà chồng; tiến hành thì xấu, không có gì lợi.",
        judgment_en: "The marrying maiden: undertakings bring misfortune; nothing that would further.",
        image_vi: "Sấm trên đầm; người quân tử trong cái lâu dài biết rõ cái hư hỏng.",
        image_en: "Thunder over the lake; the superior man understands the transitory in the light of the eternity of the end.",
    },
    Hexagram {
        number: 55,
        name_vi: "Lôi Hỏa Phong",
        name_en: "Abundance",
        pinyin: "Feng",
        judgment_vi: "Phong: thịnh lớn thì hanh thông; chớ lo, như mặt trời giữa trưa.",
        judgment_en: "Abundance has success; be not sad, be like the sun at midday.",
        image_vi: "Sấm chớp cùng đến; người quân tử xử kiện, thi hành hình phạt.",
        image_en: "Both thunder and lightning come; the superior man decides lawsuits and carries out punishments.",
    },
    Hexagram {
        number: 56,
        name_vi: "Hỏa Sơn Lữ",
        name_en: "The Wanderer",
        pinyin: "Lu",
        judgment_vi: "Lữ: lữ hành; nhỏ mà hanh thông; kẻ đi xa chính bền thì tốt.",
        judgment_en: "The wanderer: success through smallness; perseverance brings good fortune to the wanderer.",
        image_vi: "Lửa ở trên núi; người quân tử sáng suốt thận trọng việc hình, không kéo dài ngục tụng.",
        image_en: "Fire on the mountain; the superior man is clear-minded and cautious in imposing penalties.",
    },
    Hexagram {
        number: 57,
        name_vi: "Thuần Tốn",
        name_en: "The Gentle",
        pinyin: "Xun",
        judgment_vi: "Tốn: thuận nhập; nhỏ mà hanh thông; lợi cho việc có nơi để đi, nên gặp bậc đại nhân.",
        judgment_en: "The gentle: success through what is small; it furthers one to see the great man.",
        image_vi: "Gió theo gió; người quân tử truyền mệnh lệnh mà làm việc mình.",
        image_en: "Winds following one upon the other; the superior man spreads his commands abroad and carries out his undertakings.",
    },
    Hexagram {
        number: 58,
        name_vi: "Thuần Đoài",
        name_en: "The Joyous",
        pinyin: "Dui",
        judgment_vi: "Đoài: vui đẹp thì hanh thông; chính bền thì lợi.",
        judgment_en: "The joyous: success; perseverance is favorable.",
        image_vi: "Đầm liền đầm; người quân tử họp bạn giảng tập.",
        image_en: "Lakes resting one on the other; the superior man joins with his friends for discussion and practice.",
    },
    Hexagram {
        number: 59,
        name_vi: "Phong Thủy Hoán",
        name_en: "Dispersion",
        pinyin: "Huan",
        judgment_vi: "Hoán: lìa tan mà hanh thông; vua đến nhà tông miếu; lợi cho việc vượt sông lớn.",
        judgment_en: "Dispersion: success; the king approaches his temple; it furthers one to cross the great water.",
        image_vi: "Gió đi trên nước; tiên vương tế Thượng Đế, dựng tông miếu.",
        image_en: "The wind drives over the water; the kings of old sacrificed to the Lord and built temples.",
    },
    Hexagram {
        number: 60,
        name_vi: "Thủy Trạch Tiết",
        name_en: "Limitation",
        pinyin: "Jie",
        judgment_vi: "Tiết: tiết chế thì hanh thông; tiết chế khổ quá thì không thể bền.",
        judgment_en: "Limitation: success; galling limitation must not be persevered in.",
        image_vi: "Trên đầm có nước; người quân tử đặt mức độ, xét đức hạnh.",
        image_en: "Water over the lake; the superior man creates number and measure and examines the nature of virtue and correct conduct.",
    },
    Hexagram {
        number: 61,
        name_vi: "Phong Trạch Trung Phu",
        name_en: "Inner Truth",
        pinyin: "Zhong Fu",
        judgment_vi: "Trung Phu: lòng tin trong lòng cảm đến cả heo cá thì tốt; lợi cho việc vượt sông lớn.",
        judgment_en: "Inner truth: pigs and fishes; good fortune; it furthers one to cross the great water.",
        image_vi: "Gió trên đầm; người quân tử bàn việc ngục hình, hoãn việc tử.",
        image_en: "Wind over lake; the superior man discusses criminal cases in order to delay executions.",
    },
    Hexagram {
        number: 62,
        name_vi: "Lôi Sơn Tiểu Quá",
        name_en: "Preponderance of the Small",
        pinyin: "Xiao Guo",
        judgment_vi: "Tiểu Quá: cái nhỏ quá mức; việc nhỏ thì được, việc lớn thì không nên.",
        judgment_en: "Preponderance of the small: small things may be done, great things should not be done.",
        image_vi: "Trên núi có sấm; người quân tử nết làm hơn mức cung kính, tang hơn mức xót thương, dùng hơn mức tiết kiệm.",
        image_en: "Thunder on the mountain; the superior man gives preponderance to reverence in his conduct.",
    },
    Hexagram {
        number: 63,
        name_vi: "Thủy Hỏa Ký Tế",
        name_en: "After Completion",
        pinyin: "Ji Ji",
        judgment_vi: "Ký Tế: đã xong; việc nhỏ hanh thông; đầu thì tốt, cuối thì loạn.",
        judgment_en: "After completion: success in small matters; at the beginning good fortune, at the end disorder.",
        image_vi: "Nước ở trên lửa; người quân tử nghĩ đến hoạn nạn mà phòng ngừa trước.",
        image_en: "Water over fire; the superior man takes thought of misfortune and arms himself against it in advance.",
    },
    Hexagram {
        number: 64,
        name_vi: "Hỏa Thủy Vị Tế",
        name_en: "Before Completion",
        pinyin: "Wei Ji",
        judgment_vi: "Vị Tế: chưa xong mà hanh thông; con cáo nhỏ sắp qua sông, ướt cái đuôi thì không gì lợi.",
        judgment_en: "Before completion: success; but if the little fox gets his tail in the water, nothing furthers.",
        image_vi: "Lửa ở trên nước; người quân tử cẩn thận phân biệt sự vật, cho mỗi vật ở đúng chỗ.",
        image_en: "Fire over water; the superior man is careful in the differentiation of things, so that each finds its place.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagrams_are_in_king_wen_order() {
        for (i, hexagram) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(hexagram.number as usize, i + 1);
        }
    }

    #[test]
    fn test_permutation_is_a_bijection() {
        let mut seen = [false; 64];
        for &king_wen in KING_WEN_FROM_FU_XI.iter() {
            assert!((1..=64).contains(&king_wen));
            assert!(!seen[(king_wen - 1) as usize], "King Wen {} mapped twice", king_wen);
            seen[(king_wen - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_permutation_anchors() {
        // All six bits set = six Yang lines = Thuần Càn.
        assert_eq!(KING_WEN_FROM_FU_XI[0b111111], 1);
        // No bits set = six Yin lines = Thuần Khôn.
        assert_eq!(KING_WEN_FROM_FU_XI[0b000000], 2);
        // Three Yang below, three Yin above = Địa Thiên Thái.
        assert_eq!(KING_WEN_FROM_FU_XI[0b000111], 11);
        // Three Yin below, three Yang above = Thiên Địa Bĩ.
        assert_eq!(KING_WEN_FROM_FU_XI[0b111000], 12);
        // The eight doubled trigrams.
        assert_eq!(KING_WEN_FROM_FU_XI[0b001001], 51); // Chấn over Chấn
        assert_eq!(KING_WEN_FROM_FU_XI[0b010010], 29); // Khảm over Khảm
        assert_eq!(KING_WEN_FROM_FU_XI[0b100100], 52); // Cấn over Cấn
        assert_eq!(KING_WEN_FROM_FU_XI[0b110110], 57); // Tốn over Tốn
        assert_eq!(KING_WEN_FROM_FU_XI[0b101101], 30); // Ly over Ly
        assert_eq!(KING_WEN_FROM_FU_XI[0b011011], 58); // Đoài over Đoài
    }

    #[test]
    fn test_names_by_language() {
        let qian = &HEXAGRAMS[0];
        assert_eq!(qian.name(Language::Vietnamese), "Thuần Càn");
        assert_eq!(qian.name(Language::English), "The Creative");
        assert_eq!(qian.pinyin, "Qian");

        let kun = &HEXAGRAMS[1];
        assert_eq!(kun.name(Language::Vietnamese), "Thuần Khôn");
        assert_eq!(kun.name(Language::English), "The Receptive");
    }

    #[test]
    fn test_reference_texts_present() {
        for hexagram in HEXAGRAMS.iter() {
            assert!(!hexagram.judgment_vi.is_empty());
            assert!(!hexagram.judgment_en.is_empty());
            assert!(!hexagram.image_vi.is_empty());
            assert!(!hexagram.image_en.is_empty());
        }
    }
}
