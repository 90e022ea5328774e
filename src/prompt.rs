//! Prompt construction for recipe suggestions.
//!
//! The prompt is Japanese-language and asks the model for a JSON array of
//! exactly `limit` objects, each `{"title", "url"}`, restricted to a fixed
//! set of recipe-site domains. The domain restriction and the no-duplicate
//! rule are instructions to the model only; nothing downstream validates
//! the returned URLs against them.

/// Domains the model is told to pick recipe URLs from.
pub const ALLOWED_DOMAINS: [&str; 7] = [
    "cookpad.com",
    "kurashiru.com",
    "delishkitchen.tv",
    "park.ajinomoto.co.jp",
    "sirogohan.com",
    "kikkoman.co.jp",
    "youtube.com",
];

/// Build the instruction text for one suggestion request.
///
/// Deterministic and side-effect free. An empty `liked_foods` list produces
/// an empty genre clause, not an error; `limit` is embedded as-is and is not
/// validated here.
pub fn build_prompt(liked_foods: &[String], limit: usize) -> String {
    let genres = liked_foods.join("、");
    let domains = ALLOWED_DOMAINS.join("、");

    format!(
        "あなたは料理研究家です。\n\
         ユーザーが好む料理ジャンル: 【{genres}】\n\
         ユーザーが好む料理ジャンルを参考に、おすすめのレシピのタイトルとURLを出力してください。\n\
         \n\
         [出力形式]\n\
         必ず **JSON 配列** で、要素は {limit} 件ちょうど。\n\
         各要素は\n  \
         {{ \"title\": \"<レシピ名>\", \"url\": \"<実在するレシピページ URL>\" }}\n\
         のみを含めてください。\n\
         日本語のレシピに限定し、そのレシピに紐づくURLを出力します。URLは重複させません。\n\
         404エラーになるURLではダメです。\n\
         URLは必ず次のドメインのいずれかを使い、実在するレシピページのみを選択してください。\n\
         「{domains}のドメインのみ可」\n\
         \n\
         例:\n\
         [\n  \
         {{\n    \
         \"title\": \"レンジで簡単♪ささみとアボカドの和風サラダ\",\n    \
         \"url\": \"https://delishkitchen.tv/recipes/308512152539365817\"\n  \
         }},\n  \
         {{\n    \
         \"title\": \"鶏胸肉の照り焼きチキン\",\n    \
         \"url\": \"https://cookpad.com/jp/recipes/19154447\"\n  \
         }}\n\
         ]"
    )
}
