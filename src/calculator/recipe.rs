/// A fixed recipe shown alongside the nutrition check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub title: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static str,
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
}

pub const SMOOTHIE: Recipe = Recipe {
    title: "Oatmeal Smoothie Recipe",
    ingredients: &[
        "1/4 cup rolled oats",
        "2 tbsp cocoa powder",
        "1/4 cup protein powder",
        "1 tbsp maple syrup",
        "1 tbsp chia seeds",
        "1 tbsp peanut butter",
        "3/4 cup almond milk",
    ],
    instructions: "Blend all ingredients until smooth.",
    protein_grams: 30,
    carb_grams: 37,
    fat_grams: 13,
};
