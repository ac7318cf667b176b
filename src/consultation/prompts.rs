//! Fixed conversation prompts: the welcome, one question per intake stage,
//! and the frames wrapped around follow-up answers.

use super::profile::BrandProfile;
use super::stage::Stage;

/// Opening message, queued as soon as a session starts.
pub const WELCOME: &str = "👋 Hello! I'm your Personal Branding Consultant AI. I'm here to help you discover, develop, and amplify your unique personal brand. Together, we'll create a comprehensive strategy that showcases your authentic self and helps you achieve your professional goals.\n\nLet's start this exciting journey! What's your name?";

/// Reply to "more" / "detail" requests once recommendations are out.
pub const FOLLOW_UP_MENU: &str = "I'd be happy to dive deeper! What specific area would you like to explore further?\n\n- Content strategy and calendar\n- Platform-specific tactics\n- Brand voice and messaging\n- Visual identity guidelines\n- Networking strategies\n- Website planning\n\nWhat interests you most?";

/// Reply for a stage with no scripted behaviour.
pub const FALLBACK: &str = "I'd love to help you further! Feel free to ask about any aspect of personal branding, or we can start a new consultation session.";

/// The question asked on entering `stage`, with earlier answers interpolated.
///
/// Returns `None` for stages that are not entered through a question.
pub fn stage_prompt(stage: Stage, profile: &BrandProfile) -> Option<String> {
    let text = match stage {
        Stage::Intro => WELCOME.to_string(),
        Stage::Industry => format!(
            "Nice to meet you, {}! 🎯 \n\nNow, let's dive into your professional world. What industry or field do you work in? (e.g., technology, healthcare, marketing, education, finance, etc.)",
            profile.name
        ),
        Stage::Goals => format!(
            "Great! Working in {} gives us a good foundation. 🚀\n\nWhat are your main professional goals for your personal brand? Are you looking to:\n- Advance in your current career\n- Switch industries\n- Build thought leadership\n- Attract clients/customers\n- Network with peers\n- Land speaking opportunities\n\nTell me about your specific goals!",
            profile.industry
        ),
        Stage::Skills => "Excellent goals! 💪 Having clear objectives will guide our strategy.\n\nNow let's identify your superpowers. What are your top skills, expertise areas, or things you're genuinely great at? Think both technical skills and soft skills.\n\n(Feel free to list several - the more specific, the better!)".to_string(),
        Stage::Values => "Those are impressive skills! 🌟\n\nPersonal branding isn't just about what you can do - it's about who you are. What values or principles are most important to you? What do you stand for?\n\n(Examples: innovation, authenticity, helping others, sustainability, continuous learning, etc.)".to_string(),
        Stage::Audience => "Your values really shine through! 🎯\n\nNow let's talk about your ideal audience. Who do you want to reach and connect with? Think about:\n- Job titles or roles\n- Industries\n- Company sizes\n- Career stages\n- Interests or challenges they have\n\nDescribe your target audience:".to_string(),
        Stage::Challenges => "Perfect! Understanding your audience is crucial. 🎪\n\nNow let's be honest about obstacles. What challenges are you currently facing with your personal brand or professional visibility? \n\n(Examples: not enough visibility, unclear messaging, imposter syndrome, time constraints, don't know where to start, etc.)".to_string(),
        Stage::Platforms => "Thanks for being open about those challenges - we'll address them! 📱\n\nWhere do you want to build your presence? Which platforms appeal to you or where do you think your audience hangs out?\n\n- LinkedIn (professional networking)\n- Twitter/X (thought leadership, quick insights)\n- Instagram (visual storytelling)\n- YouTube (in-depth content)\n- Medium/Substack (long-form writing)\n- TikTok (creative, younger audience)\n- Personal website/blog\n- Industry-specific platforms\n\nWhich ones interest you most?".to_string(),
        Stage::Personality => "Great platform choices! 🎭\n\nNow let's capture your authentic voice. How would you describe your personality or communication style? Are you:\n\n- Analytical and data-driven\n- Creative and innovative\n- Warm and empathetic\n- Direct and results-focused\n- Humorous and approachable\n- Inspirational and motivating\n\nDescribe your natural communication style:".to_string(),
        Stage::UniqueValue => "I love your authentic style! ✨\n\nHere's a big question: What makes you uniquely YOU? What's your secret sauce - that special combination of experience, perspective, or approach that sets you apart from others in your field?\n\nThis could be your unique background, methodology, viewpoint, or way of solving problems:".to_string(),
        Stage::Content => "That's your superpower! 🚀\n\nLast question before I create your personalized recommendations: What type of content do you enjoy creating or would like to create? \n\n- Written posts/articles\n- Videos/vlogs\n- Infographics/visual content\n- Podcasts/audio\n- Case studies\n- Behind-the-scenes content\n- Educational tutorials\n- Industry insights/commentary\n\nWhat resonates with you?".to_string(),
        Stage::Recommendations | Stage::Website | Stage::Complete => return None,
    };
    Some(text)
}

/// Frame around contextual advice in the recommendations stage.
pub fn follow_up_frame(advice: &str) -> String {
    format!(
        "Great question! Let me provide some additional insights based on your profile...\n\n{advice}\n\nIs there anything else you'd like to explore about your personal branding strategy?"
    )
}

/// Frame around the detailed website advice.
pub fn website_detail_frame(advice: &str) -> String {
    format!(
        "Excellent! Based on your profile, here are more specific website recommendations:\n\n{advice}\n\nWould you like me to elaborate on any of these website elements or discuss other aspects of your personal brand?"
    )
}
