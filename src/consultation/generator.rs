//! Recommendation text built from a [`BrandProfile`].
//!
//! Every function here is total: an empty answer list is replaced by a fixed
//! placeholder phrase instead of being left blank. The only non-determinism is
//! [`brand_positioning`], which picks one of four phrasings with the caller's
//! random source.

use rand::Rng;

use super::profile::BrandProfile;

/// Stand-ins used when a list answer is empty.
pub mod placeholder {
    pub const KEY_SKILL: &str = "your key skill";
    pub const KEY_SKILLS: &str = "your key skills";
    pub const VALUES: &str = "your values";
    pub const CORE_VALUES: &str = "your core values";
    pub const CARED_ABOUT: &str = "something you care about";
    pub const GOAL: &str = "achieve your professional goals";
    pub const GROWTH: &str = "professional growth";
    pub const TONE: &str = "Professional yet approachable";
    pub const STYLE: &str = "authentic";
    pub const PLATFORM: &str = "LinkedIn";
    pub const PLATFORM_LINKS: &str = "your social profiles";
    pub const PLATFORM_KIND: &str = "social";
    pub const CONTENT_KIND: &str = "your favorite";
    pub const EXPERT: &str = "expert";
    pub const EXPERTISE: &str = "professional";
    pub const PRINCIPLES: &str = "personal";
}

fn first_or<'a>(items: &'a [String], fallback: &'a str) -> &'a str {
    items.first().map(String::as_str).unwrap_or(fallback)
}

fn joined_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

/// Case-insensitive check for any of `needles` inside `text`.
pub(crate) fn mentions_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

/// The four positioning statements [`brand_positioning`] chooses from.
pub fn brand_positioning_candidates(profile: &BrandProfile) -> [String; 4] {
    let industry = &profile.industry;
    let voice = if profile.unique_value.to_lowercase().contains("unique") {
        "distinctive"
    } else {
        "results-driven"
    };
    [
        format!(
            "The {} {industry} professional who brings {} to everything they do",
            first_or(&profile.skills, "skilled"),
            first_or(&profile.values, "innovation"),
        ),
        format!("A {voice} voice in {industry}"),
        format!(
            "The go-to expert for {} in {industry}",
            first_or(&profile.skills, "professional solutions"),
        ),
        format!(
            "A {} {industry} leader focused on {}",
            first_or(&profile.values, "passionate"),
            first_or(&profile.skills, "excellence"),
        ),
    ]
}

/// One positioning statement, chosen uniformly at random.
pub fn brand_positioning<R: Rng + ?Sized>(profile: &BrandProfile, rng: &mut R) -> String {
    let mut candidates = brand_positioning_candidates(profile);
    let pick = rng.gen_range(0..candidates.len());
    std::mem::take(&mut candidates[pick])
}

/// One strategy line per recognised platform, in a fixed order.
pub fn platform_strategy(profile: &BrandProfile) -> String {
    let platforms = profile.preferred_platforms.join(", ").to_lowercase();
    let mut strategy = String::new();

    if platforms.contains("linkedin") {
        strategy.push_str(
            "**LinkedIn (Primary):** Share professional insights, engage with industry content, publish articles\n",
        );
    }
    if platforms.contains("twitter") || platforms.contains('x') {
        strategy.push_str(
            "**Twitter/X:** Quick industry takes, join conversations, share curated content\n",
        );
    }
    if platforms.contains("instagram") {
        strategy.push_str(
            "**Instagram:** Behind-the-scenes content, visual storytelling, day-in-the-life posts\n",
        );
    }
    if platforms.contains("website") || platforms.contains("blog") {
        strategy.push_str(
            "**Personal Website:** Your digital headquarters - portfolio, blog, contact information\n",
        );
    }

    if strategy.is_empty() {
        format!(
            "Focus on {} as your primary platform to reach {}",
            first_or(&profile.preferred_platforms, placeholder::PLATFORM),
            profile.target_audience
        )
    } else {
        strategy
    }
}

/// Five things to do this week.
pub fn quick_wins(profile: &BrandProfile) -> String {
    format!(
        "1. **Optimize your LinkedIn headline** to include \"{}\" and \"{}\"\n\
         2. **Write your first value-driven post** about {}\n\
         3. **Engage authentically** with 5 posts in your industry daily\n\
         4. **Update your bio** across all platforms with consistent messaging\n\
         5. **Start planning your personal website** to establish your digital presence",
        first_or(&profile.skills, placeholder::KEY_SKILL),
        profile.industry,
        first_or(&profile.values, placeholder::CARED_ABOUT),
    )
}

/// The full strategy delivered when the intake questions are done.
pub fn recommendations_summary<R: Rng + ?Sized>(profile: &BrandProfile, rng: &mut R) -> String {
    let p = profile;
    format!(
        "🎉 Fantastic, {name}! I've analyzed your responses and here's your personalized Personal Brand Strategy:\n\
         \n\
         ## 🎯 Your Brand Foundation\n\
         **Industry Focus:** {industry}\n\
         **Unique Value Proposition:** {unique}\n\
         **Core Values:** {values}\n\
         \n\
         ## 🚀 Recommended Brand Positioning\n\
         Based on your {traits} communication style and expertise in {skills}, position yourself as \"{positioning}\"\n\
         \n\
         ## 📱 Platform Strategy\n\
         {platforms}\n\
         \n\
         ## 📝 Content Themes (Your \"Content Pillars\")\n\
         1. **Expertise Showcase:** Share insights about {skill}\n\
         2. **Industry Commentary:** Thoughts on trends in {industry}\n\
         3. **Value-Driven Content:** Content that reflects your commitment to {value}\n\
         4. **Personal Journey:** Behind-the-scenes of your professional growth\n\
         5. **Community Building:** Engaging with {audience}\n\
         \n\
         ## 🎨 Brand Voice Guidelines\n\
         - **Tone:** {tone}\n\
         - **Language:** Speak directly to {audience}\n\
         - **Frequency:** Start with 2-3 posts per week on your primary platform\n\
         \n\
         ## 🔥 Quick Wins (Start This Week!)\n\
         {quick_wins}\n\
         \n\
         ## 🌐 Website Recommendation\n\
         Based on your goals and audience, you should definitely create a personal website! It will serve as your digital headquarters and help you {goal}.\n\
         \n\
         Would you like me to create a detailed website strategy for you, or do you have questions about implementing any of these recommendations?",
        name = p.name,
        industry = p.industry,
        unique = p.unique_value,
        values = joined_or(&p.values, placeholder::VALUES),
        traits = joined_or(&p.personality_traits, placeholder::STYLE),
        skills = joined_or(&p.skills, placeholder::KEY_SKILLS),
        positioning = brand_positioning(p, rng),
        platforms = platform_strategy(p),
        skill = first_or(&p.skills, placeholder::KEY_SKILLS),
        value = first_or(&p.values, placeholder::VALUES),
        audience = p.target_audience,
        tone = first_or(&p.personality_traits, placeholder::TONE),
        quick_wins = quick_wins(p),
        goal = first_or(&p.goals, placeholder::GOAL),
    )
}

/// Website blueprint sent when the user asks about a site.
pub fn website_strategy<R: Rng + ?Sized>(profile: &BrandProfile, rng: &mut R) -> String {
    let p = profile;
    let platforms = joined_or(&p.preferred_platforms, placeholder::PLATFORM_LINKS);
    let traits = joined_or(&p.personality_traits, placeholder::STYLE);

    let parts = [
        "🌐 **Your Personal Website Strategy**".to_string(),
        String::new(),
        format!(
            "Based on your profile as a {} professional focused on {}, here's your website blueprint:",
            p.industry,
            first_or(&p.goals, placeholder::GROWTH)
        ),
        String::new(),
        "## 🏠 Essential Pages".to_string(),
        "1. **Home/Hero Section**".to_string(),
        format!("   - Clear headline: \"{}\"", brand_positioning(p, rng)),
        "   - Professional photo".to_string(),
        "   - Brief value proposition".to_string(),
        "   - Call-to-action button".to_string(),
        String::new(),
        "2. **About Page**".to_string(),
        "   - Your story and journey".to_string(),
        format!("   - Values: {}", joined_or(&p.values, placeholder::CORE_VALUES)),
        format!("   - What makes you unique: {}", p.unique_value),
        String::new(),
        "3. **Services/Expertise**".to_string(),
        format!("   - Showcase: {}", joined_or(&p.skills, placeholder::KEY_SKILLS)),
        "   - Case studies or examples".to_string(),
        "   - Client testimonials".to_string(),
        String::new(),
        "4. **Blog/Insights**".to_string(),
        format!("   - Regular content about {}", p.industry),
        "   - Thought leadership pieces".to_string(),
        format!(
            "   - {} content",
            joined_or(&p.content_preferences, placeholder::CONTENT_KIND)
        ),
        String::new(),
        "5. **Contact/Connect**".to_string(),
        "   - Multiple ways to reach you".to_string(),
        format!("   - Links to {platforms}"),
        "   - Speaking/collaboration opportunities".to_string(),
        String::new(),
        "## 🎨 Design Recommendations".to_string(),
        format!(
            "- **Color Scheme:** Professional yet reflecting your {} personality",
            first_or(&p.personality_traits, placeholder::STYLE)
        ),
        "- **Layout:** Clean, easy navigation, mobile-responsive".to_string(),
        format!("- **Content Tone:** {traits} voice"),
        String::new(),
        "## 🚀 Technical Features".to_string(),
        format!(
            "- SEO optimized for \"{} {}\"",
            p.industry,
            first_or(&p.skills, placeholder::EXPERT)
        ),
        "- Fast loading speed".to_string(),
        "- Contact forms".to_string(),
        "- Social media integration".to_string(),
        "- Blog/content management system".to_string(),
        String::new(),
        "## 📈 Launch Strategy".to_string(),
        "1. Start with core pages (Home, About, Contact)".to_string(),
        "2. Add blog and start publishing weekly".to_string(),
        "3. Optimize for search engines".to_string(),
        format!(
            "4. Share website launch across your {} platforms",
            joined_or(&p.preferred_platforms, placeholder::PLATFORM_KIND)
        ),
        String::new(),
        "Ready to start building? I can provide more specific guidance on any aspect of your website strategy!".to_string(),
    ];

    parts.join("\n")
}

/// Deeper website advice for every message after the blueprint.
pub fn detailed_website_advice(profile: &BrandProfile) -> String {
    format!(
        "Here are more detailed website recommendations:\n\
         \n\
         **Content Strategy:**\n\
         - Blog weekly about {industry} trends\n\
         - Create a resource library for {audience}\n\
         - Include client success stories\n\
         - Add a newsletter signup\n\
         \n\
         **SEO Focus:**\n\
         - Target keywords: \"{industry} {skill}\"\n\
         - Local SEO if relevant to your business\n\
         - Regular fresh content\n\
         \n\
         **Conversion Elements:**\n\
         - Clear contact forms\n\
         - Social proof (testimonials, logos)\n\
         - Compelling calls-to-action\n\
         - Easy ways to connect on {platform}\n\
         \n\
         **Technical Considerations:**\n\
         - Mobile-first design\n\
         - Fast loading (under 3 seconds)\n\
         - SSL certificate\n\
         - Google Analytics setup\n\
         \n\
         Would you like specific recommendations for website builders, content ideas, or design inspiration?",
        industry = profile.industry,
        audience = profile.target_audience,
        skill = first_or(&profile.skills, placeholder::EXPERT),
        platform = first_or(&profile.preferred_platforms, placeholder::PLATFORM),
    )
}

/// Which advice block a free-form question maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTopic {
    Content,
    Networking,
    General,
}

impl AdviceTopic {
    /// First match wins: content, then networking, then general.
    pub fn classify(question: &str) -> Self {
        if mentions_any(question, &["content", "post"]) {
            Self::Content
        } else if mentions_any(question, &["network", "connect"]) {
            Self::Networking
        } else {
            Self::General
        }
    }
}

/// Advice block answering a free-form follow-up question.
pub fn contextual_advice(profile: &BrandProfile, question: &str) -> String {
    let p = profile;
    match AdviceTopic::classify(question) {
        AdviceTopic::Content => format!(
            "For content creation, focus on these themes based on your profile:\n\
             - Share insights about {}\n\
             - Comment on {} trends\n\
             - Stories that reflect your values: {}\n\
             - Help your audience: {}",
            first_or(&p.skills, placeholder::KEY_SKILL),
            p.industry,
            first_or(&p.values, placeholder::CORE_VALUES),
            p.target_audience,
        ),
        AdviceTopic::Networking => format!(
            "Networking tips for you:\n\
             - Engage with {} on {}\n\
             - Share your expertise in {}\n\
             - Join {} communities\n\
             - Offer value before asking for anything",
            p.target_audience,
            first_or(&p.preferred_platforms, placeholder::PLATFORM),
            first_or(&p.skills, placeholder::KEY_SKILL),
            p.industry,
        ),
        AdviceTopic::General => format!(
            "Based on your goals and profile, I'd recommend focusing on consistency and authenticity. \
             Your unique combination of {} expertise and {} values will resonate with {}.",
            first_or(&p.skills, placeholder::EXPERTISE),
            first_or(&p.values, placeholder::PRINCIPLES),
            p.target_audience,
        ),
    }
}
