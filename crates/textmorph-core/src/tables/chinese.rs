//! Chinese-script tables

pub(super) const DECOMPOSITION: &[(char, &str)] = &[
    ('好', "女子"),
    ('明', "日月"),
    ('林', "木木"),
    ('森', "木木木"),
    ('休', "亻木"),
    ('体', "亻本"),
    ('你', "亻尔"),
    ('他', "亻也"),
    ('们', "亻门"),
    ('信', "亻言"),
    ('语', "讠吾"),
    ('说', "讠兑"),
    ('话', "讠舌"),
    ('请', "讠青"),
    ('清', "氵青"),
    ('情', "忄青"),
    ('晴', "日青"),
    ('睛', "目青"),
    ('江', "氵工"),
    ('河', "氵可"),
    ('海', "氵每"),
    ('汉', "氵又"),
    ('妈', "女马"),
    ('姐', "女且"),
    ('妹', "女未"),
    ('炎', "火火"),
    ('鑫', "金金金"),
    ('晶', "日日日"),
    ('品', "口口口"),
    ('从', "人人"),
    ('众', "人人人"),
    ('男', "田力"),
    ('岩', "山石"),
    ('尖', "小大"),
    ('歪', "不正"),
    ('孬', "不好"),
    ('甭', "不用"),
    ('字', "宀子"),
    ('安', "宀女"),
    ('间', "门日"),
    ('问', "门口"),
    ('闪', "门人"),
    ('和', "禾口"),
    ('秋', "禾火"),
    ('思', "田心"),
    ('忘', "亡心"),
    ('忍', "刃心"),
    ('时', "日寸"),
    ('李', "木子"),
    ('杏', "木口"),
    ('呆', "口木"),
    ('困', "口木"),
    ('国', "口玉"),
    ('智', "知日"),
    ('能', "厶月匕匕"),
    ('叶', "口十"),
    ('吃', "口乞"),
    ('喝', "口曷"),
    ('唱', "口昌"),
    ('昌', "日日"),
    ('多', "夕夕"),
    ('双', "又又"),
    ('朋', "月月"),
    ('出', "山山"),
    ('圭', "土土"),
    ('淼', "水水水"),
    ('焱', "火火火"),
    ('磊', "石石石"),
];

pub(super) const SIMPLIFIED_TO_TRADITIONAL: &[(char, &str)] = &[
    ('国', "國"),
    ('汉', "漢"),
    ('语', "語"),
    ('说', "說"),
    ('话', "話"),
    ('东', "東"),
    ('车', "車"),
    ('马', "馬"),
    ('门', "門"),
    ('时', "時"),
    ('长', "長"),
    ('书', "書"),
    ('学', "學"),
    ('习', "習"),
    ('爱', "愛"),
    ('来', "來"),
    ('们', "們"),
    ('这', "這"),
    ('个', "個"),
    ('为', "為"),
    ('会', "會"),
    ('发', "發"),
    ('后', "後"),
    ('电', "電"),
    ('脑', "腦"),
    ('网', "網"),
    ('络', "絡"),
    ('对', "對"),
    ('开', "開"),
    ('关', "關"),
    ('见', "見"),
    ('贝', "貝"),
    ('鱼', "魚"),
    ('鸟', "鳥"),
    ('龙', "龍"),
    ('风', "風"),
    ('云', "雲"),
    ('气', "氣"),
    ('华', "華"),
    ('买', "買"),
    ('卖', "賣"),
    ('钱', "錢"),
    ('银', "銀"),
    ('体', "體"),
    ('医', "醫"),
    ('药', "藥"),
    ('历', "歷"),
    ('万', "萬"),
    ('与', "與"),
    ('义', "義"),
    ('乐', "樂"),
    ('业', "業"),
    ('产', "產"),
    ('亲', "親"),
    ('问', "問"),
    ('间', "間"),
    ('听', "聽"),
    ('读', "讀"),
    ('写', "寫"),
    ('认', "認"),
    ('识', "識"),
    ('让', "讓"),
    ('进', "進"),
    ('远', "遠"),
    ('运', "運"),
    ('还', "還"),
    ('边', "邊"),
    ('过', "過"),
    ('动', "動"),
    ('员', "員"),
    ('园', "園"),
    ('图', "圖"),
    ('场', "場"),
    ('报', "報"),
    ('师', "師"),
    ('应', "應"),
    ('总', "總"),
    ('热', "熱"),
    ('节', "節"),
    ('号', "號"),
    ('欢', "歡"),
    ('饭', "飯"),
    ('钟', "鐘"),
    ('头', "頭"),
    ('题', "題"),
    ('页', "頁"),
    ('杂', "雜"),
    ('觉', "覺"),
    ('术', "術"),
    ('实', "實"),
    ('现', "現"),
    ('经', "經"),
    ('济', "濟"),
    ('机', "機"),
];

pub(super) const DIGIT_TO_CHINESE_NUMERAL: &[(char, &str)] = &[
    ('0', "零"),
    ('1', "壹"),
    ('2', "贰"),
    ('3', "叁"),
    ('4', "肆"),
    ('5', "伍"),
    ('6', "陆"),
    ('7', "柒"),
    ('8', "捌"),
    ('9', "玖"),
];

pub(super) const SIMPLIFIED_LEET: &[(char, &str)] = &[
    ('的', "の"),
    ('你', "伱"),
    ('我', "莪"),
    ('是', "昰"),
    ('好', "恏"),
    ('在', "茬"),
    ('有', "洧"),
    ('人', "亾"),
    ('他', "彵"),
    ('她', "迆"),
    ('们', "們"),
    ('说', "説"),
    ('爱', "嫒"),
    ('美', "羙"),
    ('不', "卟"),
    ('了', "ㄋ"),
    ('和', "咊"),
    ('吗', "嬷"),
    ('没', "莈"),
    ('么', "庅"),
    ('就', "僦"),
    ('到', "菿"),
    ('去', "厾"),
    ('心', "杺"),
    ('很', "佷"),
    ('可', "鈳"),
    ('以', "苡"),
    ('天', "兲"),
    ('那', "哪"),
    ('快', "赽"),
    ('乐', "泺"),
    ('生', "甠"),
    ('日', "ㄖ"),
];

pub(super) const TRADITIONAL_LEET: &[(char, &str)] = &[
    ('們', "扪"),
    ('說', "説"),
    ('愛', "嬡"),
    ('嗎', "嬷"),
    ('麼', "庅"),
    ('這', "適"),
    ('來', "錸"),
    ('時', "溡"),
    ('會', "噲"),
    ('樂', "濼"),
    ('個', "箇"),
    ('沒', "莈"),
];
