use super::Category::{Ads, Explainer, Gaming, MotionDesign};
use super::{Contact, ExperienceEntry, Profile, Project, Skill, SkillLevel};

const fn project(
    title: &'static str,
    video_id: &'static str,
    categories: &'static [super::Category],
) -> Project {
    Project {
        title,
        video_id,
        is_vertical: false,
        categories,
    }
}

const fn vertical(
    title: &'static str,
    video_id: &'static str,
    categories: &'static [super::Category],
) -> Project {
    Project {
        title,
        video_id,
        is_vertical: true,
        categories,
    }
}

pub static PROJECTS: &[Project] = &[
    project("Boinkers Ad Penguins", "diovI-ORqiw", &[Gaming, Ads]),
    project("Snoop Dogg Collab", "96f2ju7AgYI", &[Gaming]),
    project("Acid ID Intro", "jEyfVev77ZQ", &[Gaming, MotionDesign]),
    project("Year in Review Gaming", "Gwbw04VOJj4", &[Gaming, MotionDesign]),
    project("Playtika Caesar Slots VIP", "UJyx16sYjE0", &[Gaming]),
    vertical("Energy Telegram (Vertical)", "soFt0szMeKQ", &[Gaming]),
    project("Pokergram Ad", "X171leFBmmk", &[Ads]),
    project("Rocket Dark Ad", "93HHduMJugE", &[Ads]),
    project("Boinkers Ad 05", "0lICmdEi0EQ", &[Ads, Gaming]),
    project("Boinkers Ad 08", "AiygNIIG2js", &[Ads, Gaming]),
    vertical("Boinkers Ad 03 (Vertical)", "Pa5XedOcaAk", &[Ads, Gaming]),
    project("OnBoarding New Employee", "hhtEXyHC8zE", &[Explainer]),
    project("Discord Bot Explained", "xrHBchglzPA", &[Explainer]),
    project("HR Explainer", "bgFMl3OgBf4", &[Explainer]),
    project("Hachsharot", "_B3VRQox9Z8", &[Explainer]),
    project("Citi Bank", "9TfUKmPfVTI", &[Explainer, MotionDesign]),
    project("PHH Mortgage", "SyvoJ0y7ZiQ", &[Explainer]),
    project("NGLS", "bGW4P1-f-uo", &[Explainer]),
    project("Text Animation Feature", "AGBy67vAYO4", &[MotionDesign]),
    project("Personal Logo Animation", "YvuoW_yKzQo", &[MotionDesign]),
    project("DGM Race", "7yn260QbkLo", &[MotionDesign]),
];

pub static EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Acid Labs",
        role: "Animator & Motion Graphics Designer",
        period: "2024 - 2025",
        location: "Tel-Aviv, Israel",
        bullets: &[
            "Produced promotional videos, social media ads, and in-game marketing assets.",
            "Created animated Telegram stickers and loot boxes to drive user engagement.",
            "Mastered Spine2D for high-quality character and UI animations integrated into game engines.",
        ],
    },
    ExperienceEntry {
        company: "Idomoo",
        role: "Animator, Motion Graphics & Graphic Designer",
        period: "2019 - 2024",
        location: "Ra'anana, Israel",
        bullets: &[
            "Led the creative production of personalized video campaigns for global brands.",
            "Crafted cinematic 'Year in Review' videos for Blizzard, Playtika, and Huuuge Games.",
            "Collaborated with developers to optimize motion templates for real-time video generation.",
        ],
    },
    ExperienceEntry {
        company: "Self-Employed",
        role: "Motion Designer & Video Editor",
        period: "2012 - 2019",
        location: "San Diego, CA, USA",
        bullets: &[
            "Delivered end-to-end video solutions for a diverse range of clients and industries.",
            "Specialized in explainer videos, logo animations, and corporate storytelling.",
            "Managed multiple projects simultaneously from concept and storyboard to final delivery.",
        ],
    },
    ExperienceEntry {
        company: "Shnaiderman Advertising",
        role: "Graphic Designer & Art Director",
        period: "2010 - 2012",
        location: "Tel-Aviv, Israel",
        bullets: &[
            "Designed branding materials, print ads, and comprehensive advertising campaigns.",
            "Provided art direction for cohesive visual languages across multiple media platforms.",
            "Managed client relationships and project timelines in a fast-paced agency environment.",
        ],
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "After Effects", level: SkillLevel::Expert, percent: 100 },
    Skill { name: "Premiere Pro", level: SkillLevel::Expert, percent: 100 },
    Skill { name: "Photoshop", level: SkillLevel::Expert, percent: 100 },
    Skill { name: "Illustrator", level: SkillLevel::Expert, percent: 100 },
    Skill { name: "InDesign", level: SkillLevel::Expert, percent: 100 },
    Skill { name: "Spine2D", level: SkillLevel::Advanced, percent: 85 },
    Skill { name: "AI Tools", level: SkillLevel::Intermediate, percent: 65 },
    Skill { name: "3D Modeling", level: SkillLevel::Intermediate, percent: 60 },
    Skill { name: "HTML", level: SkillLevel::Intermediate, percent: 65 },
];

pub static COMPANIES: &[&str] = &[
    "Blizzard",
    "Playtika",
    "Playdemic",
    "Huuuge games",
    "Citi Bank",
    "SDG&E",
    "T-Mobile",
    "Epic games",
    "Acid Labs",
    "Microsoft",
    "Chase bank",
    "Israeli Police Department",
    "Israel Railways",
    "Mey Eden",
    "Israel Aerospace Industries",
    "Bezeq International",
];

pub static CONTACT: Contact = Contact {
    owner: "Eyal Moskovitch",
    phone: "+972 54-206-6511",
    location: "Tel Aviv, Israel",
    email: "eyalm317@gmail.com",
    linkedin: "https://linkedin.com/in/eyalmosko",
    made_in: "Made in Tel Aviv",
};

pub static PROFILE: Profile = Profile {
    brand: "EYAL MOSKOVITCH.",
    availability: "Available for work",
    headline: &["BRINGING", "STORIES", "TO LIFE THROUGH", "MOTION"],
    accent_line: 1,
    intro: "I'm Eyal Moskovitch. An animator & designer crafting high-impact visual \
            experiences for gaming, tech, and global brands.",
    cv_file: "EyalMoskovitchCV.pdf",
    portrait_file: "image_e39e8d.png",
};
