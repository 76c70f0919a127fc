use crate::models::{Skill, SkillCategory};

use super::file_store::ensure_id;

fn skill(icon: &str, label: &str, category: SkillCategory, icon_size: Option<&str>) -> Skill {
    ensure_id(Skill {
        id: None,
        icon: icon.to_string(),
        label: label.to_string(),
        category,
        icon_size: icon_size.map(str::to_string),
    })
}

/// The skill set the site launched with, written to disk the first time
/// the skills collection is loaded. Ids are assigned at seed time so
/// the bootstrap file already satisfies the identity invariant.
pub fn default_skills() -> Vec<Skill> {
    use SkillCategory::{Languages, Professional, Technologies};

    vec![
        skill("FaUsers", "Collaborative Development", Professional, None),
        skill("FaPencilAlt", "UI/UX Design", Professional, None),
        skill("FaLaptopCode", "Corporate IT Support", Professional, None),
        skill("FaCube", "3D Modeling and Design", Professional, None),
        // Icon-only entry: the C# glyph carries its own text.
        skill("TbBrandCSharp", "", Languages, Some("text-lg")),
        skill("FaPython", "Python", Languages, None),
        skill("SiTypescript", "JavaScript/TypeScript", Languages, None),
        skill("SiKotlin", "Kotlin", Languages, None),
        skill("FaPhp", "PHP", Languages, Some("text-xl")),
        skill("FaHtml5", "HTML", Languages, None),
        skill("FaDatabase", "SQL", Languages, None),
        skill("FaReact", "React/Next.js", Technologies, None),
        skill("FaLaravel", "Laravel", Technologies, None),
        skill("SiTailwindcss", "Tailwind CSS", Technologies, None),
        skill("FaUnity", "Unity", Technologies, None),
        skill("SiUnrealengine", "Unreal Engine", Technologies, None),
        skill("FaGithub", "Github", Technologies, None),
        skill("FaMicrochip", "ESP32", Technologies, None),
        skill("FaAndroid", "Android Studio", Technologies, None),
        skill("FaMobile", "Jetpack Compose", Technologies, None),
    ]
}
