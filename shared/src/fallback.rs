//! Bundled sample content shown when the backend cannot deliver and the
//! configured [`crate::FallbackPolicy`] allows it.

use crate::{
    config::defaults,
    models::{Author, ContentItem, ContentKind, ContentStatus, StoryDetails},
    utils,
};

const UNSPLASH_QUERY: &str = "ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&q=80&w=600";

struct SampleBlog {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    published_at: &'static str,
    read_time: &'static str,
    photo: &'static str,
}

const RECENT_BLOGS: [SampleBlog; 3] = [
    SampleBlog {
        id: "mock1",
        title: "Breaking the Challan Exploitation: A Citizen's Victory",
        excerpt: "Our first major breakthrough in reforming Patna's traffic challan system shows \
                  how organized citizen action can challenge unfair practices.",
        category: "Reform Victory",
        published_at: "2025-01-15T00:00:00Z",
        read_time: "5 min read",
        photo: "photo-1668149941577-7473eb4ac060",
    },
    SampleBlog {
        id: "mock2",
        title: "Youth for Bihar: The New Generation of Change-Makers",
        excerpt: "How young professionals and students are becoming the backbone of our civic \
                  reform movement.",
        category: "Youth Power",
        published_at: "2025-01-10T00:00:00Z",
        read_time: "4 min read",
        photo: "photo-1557804506-669a67965ba0",
    },
    SampleBlog {
        id: "mock3",
        title: "Building Self-Governance: Ward-Level Democracy in Action",
        excerpt: "Our pilot program for decentralized decision-making is showing promising \
                  results.",
        category: "Governance",
        published_at: "2025-01-05T00:00:00Z",
        read_time: "6 min read",
        photo: "photo-1573164713714-d95e436ab8d6",
    },
];

/// The fixed homepage items, newest first, at most `limit` of them.
pub fn recent_blogs(limit: usize) -> Vec<ContentItem> {
    RECENT_BLOGS
        .iter()
        .take(limit)
        .map(|sample| ContentItem {
            id: sample.id.to_string(),
            kind: ContentKind::Blog,
            slug: Some(utils::generate_slug(sample.title)),
            title: sample.title.to_string(),
            excerpt: sample.excerpt.to_string(),
            body_html: format!("<p>{}</p>", sample.excerpt),
            category: sample.category.to_string(),
            tags: Vec::new(),
            author: Author {
                name: "Vishal Singh".to_string(),
                bio: defaults::FEATURED_AUTHOR_BIO.to_string(),
                avatar_url: utils::image_url(defaults::AUTHOR_IMAGE),
            },
            published_at: Some(sample.published_at.to_string()),
            read_time_label: sample.read_time.to_string(),
            image_url: format!("https://images.unsplash.com/{}?{UNSPLASH_QUERY}", sample.photo),
            status: ContentStatus::Published,
            story: None,
        })
        .collect()
}

struct SampleStory {
    title: &'static str,
    paragraphs: &'static [&'static str],
    excerpt: &'static str,
    category: &'static str,
    author_name: &'static str,
    author_role: &'static str,
    author_location: &'static str,
    author_age: &'static str,
    author_photo: &'static str,
    photo: &'static str,
    date: &'static str,
    submitted: &'static str,
    tags: &'static [&'static str],
    location: &'static str,
    impact: &'static str,
}

const SAMPLE_STORIES: [SampleStory; 6] = [
    SampleStory {
        title: "From Darkness to Light: How Education Changed My Life",
        paragraphs: &[
            "Growing up in a small village near Patna, I never imagined that education would \
             become my pathway to freedom and empowerment.",
            "Everything changed when the \"We The People of Patna\" movement reached our \
             village. Their education initiative brought not just books and teachers, but hope \
             and possibility.",
            "Today, I'm pursuing my Bachelor's degree in Social Work, and I dream of becoming a \
             teacher myself.",
        ],
        excerpt: "A young woman's inspiring journey from rural poverty to educational success \
                  through community support and determination.",
        category: "Education",
        author_name: "Priya Kumari",
        author_role: "Student & Community Volunteer",
        author_location: "Patna District, Bihar",
        author_age: "22",
        author_photo: "photo-1494790108755-2616c2c51b68",
        photo: "photo-1509062522246-3755977927d7",
        date: "2025-03-15",
        submitted: "2025-03-10",
        tags: &["education", "women empowerment", "rural development", "scholarship"],
        location: "Patna District",
        impact: "Priya's story has inspired 15 other girls in her village to continue their \
                 education. She now runs weekend literacy classes for women in her community.",
    },
    SampleStory {
        title: "Justice Served: How We Fought Corruption Together",
        paragraphs: &[
            "For years, getting basic government services in our neighborhood meant paying \
             bribes and dealing with corrupt officials.",
            "Our neighborhood formed a monitoring committee. We documented every instance of \
             corruption, organized peaceful protests, and demanded accountability from local \
             officials.",
            "Within six months, the corrupt practices at our local government office were \
             eliminated.",
        ],
        excerpt: "A community's successful fight against local corruption through organized \
                  citizen action and transparency initiatives.",
        category: "Justice",
        author_name: "Rajesh Singh",
        author_role: "Local Business Owner",
        author_location: "Kankarbagh, Patna",
        author_age: "45",
        author_photo: "photo-1507003211169-0a1dd7228f2d",
        photo: "photo-1589829545856-d10d557cf95f",
        date: "2025-03-12",
        submitted: "2025-03-08",
        tags: &["anti-corruption", "citizen rights", "transparency", "community organizing"],
        location: "Kankarbagh, Patna",
        impact: "The citizen monitoring committee model has been replicated in 12 other \
                 neighborhoods, resulting in significant reduction in petty corruption.",
    },
    SampleStory {
        title: "Healing Hearts: Building a Better Healthcare System",
        paragraphs: &[
            "As a nurse working in a government hospital, I witnessed daily the struggles of \
             patients who couldn't afford proper treatment.",
            "We started mobile health camps in remote villages, providing free basic medical \
             checkups and health education.",
            "Over the past year, our mobile health camps have reached over 5,000 people in \
             rural areas.",
        ],
        excerpt: "A healthcare worker's mission to bring medical services and health education \
                  to underserved rural communities.",
        category: "Healthcare",
        author_name: "Dr. Sunita Devi",
        author_role: "Government Hospital Nurse",
        author_location: "Patna Medical College Hospital",
        author_age: "38",
        author_photo: "photo-1559839734-2b71ea197ec2",
        photo: "photo-1576091160399-112ba8d25d1f",
        date: "2025-03-10",
        submitted: "2025-03-05",
        tags: &["healthcare", "rural development", "medical camps", "health education"],
        location: "Patna & Rural Districts",
        impact: "The mobile health camp model has been adopted by the district health \
                 department and is now running in 25 villages with regular government support.",
    },
    SampleStory {
        title: "Green Revolution: Transforming Our Community Environment",
        paragraphs: &[
            "The empty lot behind our housing complex had become a dumping ground for garbage, \
             creating health hazards and environmental problems.",
            "A group of us organized a community cleanup drive and transformed the wasteland \
             into a beautiful garden.",
            "Today, our community garden serves as a green lung in our concrete neighborhood.",
        ],
        excerpt: "A community's transformation of a garbage dump into a thriving garden through \
                  collective environmental action.",
        category: "Community",
        author_name: "Amit Kumar",
        author_role: "Software Engineer & Environmental Activist",
        author_location: "Boring Road, Patna",
        author_age: "32",
        author_photo: "photo-1472099645785-5658abf4ff4e",
        photo: "photo-1416879595882-3373a0480b5b",
        date: "2025-03-08",
        submitted: "2025-03-03",
        tags: &["environment", "community garden", "urban development", "waste management"],
        location: "Boring Road, Patna",
        impact: "The project model has been replicated in 8 other neighborhoods, creating over \
                 10,000 square feet of green space in urban Patna.",
    },
    SampleStory {
        title: "Voice of the Youth: Empowering the Next Generation",
        paragraphs: &[
            "Growing up in Bihar, I often heard adults say that young people should focus on \
             studies and stay away from politics and social issues.",
            "One of our most successful initiatives was the \"Youth Budget\" project, where we \
             proposed specific budget allocations for youth development in our district.",
            "Today, I mentor younger students and help them understand that democracy is \
             something they actively participate in and shape.",
        ],
        excerpt: "A young activist's journey from passive observer to active participant in \
                  democratic governance and community development.",
        category: "Youth",
        author_name: "Kavya Sharma",
        author_role: "College Student & Youth Leader",
        author_location: "Patna University Campus",
        author_age: "21",
        author_photo: "photo-1438761681033-6461ffad8d80",
        photo: "photo-1523240795612-9a054b0db644",
        date: "2025-03-05",
        submitted: "2025-02-28",
        tags: &["youth empowerment", "civic engagement", "student activism", "policy advocacy"],
        location: "Patna University Area",
        impact: "The Youth Budget initiative has been adopted by student councils in 15 colleges \
                 across Bihar, influencing youth-focused policy decisions.",
    },
    SampleStory {
        title: "Breaking Barriers: Women Leading Change",
        paragraphs: &[
            "In my village, women traditionally had limited voices in community decisions.",
            "Our breakthrough came when we successfully lobbied for the installation of hand \
             pumps in areas where women had to walk long distances for water.",
            "Today, women in our village actively participate in gram panchayat meetings, and \
             our suggestions are taken seriously.",
        ],
        excerpt: "A rural woman's transformation into a community leader and advocate for \
                  women's participation in local governance.",
        category: "Community",
        author_name: "Rekha Devi",
        author_role: "Self-Help Group Leader",
        author_location: "Danapur Block, Patna District",
        author_age: "42",
        author_photo: "photo-1580489944761-15a19d654956",
        photo: "photo-1544717297-fa95b6ee9643",
        date: "2025-03-01",
        submitted: "2025-02-25",
        tags: &["women empowerment", "rural governance", "self-help groups", "community leadership"],
        location: "Danapur Block, Patna District",
        impact: "Rekha's leadership has inspired the formation of 12 women's self-help groups in \
                 neighboring villages, creating a network of 300+ women actively participating \
                 in local governance.",
    },
];

/// Six approved sample stories with ids `"1"` to `"6"`; the first one is
/// the featured story.
pub fn sample_stories() -> Vec<ContentItem> {
    SAMPLE_STORIES
        .iter()
        .enumerate()
        .map(|(index, sample)| ContentItem {
            id: (index + 1).to_string(),
            kind: ContentKind::Story,
            slug: Some(utils::generate_slug(sample.title)),
            title: sample.title.to_string(),
            excerpt: sample.excerpt.to_string(),
            body_html: sample
                .paragraphs
                .iter()
                .map(|paragraph| format!("<p>{paragraph}</p>"))
                .collect::<Vec<_>>()
                .join("\n"),
            category: sample.category.to_string(),
            tags: sample.tags.iter().map(|tag| (*tag).to_string()).collect(),
            author: Author {
                name: sample.author_name.to_string(),
                bio: sample.author_role.to_string(),
                avatar_url: format!(
                    "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=150&h=150&q=80",
                    sample.author_photo
                ),
            },
            published_at: Some(sample.date.to_string()),
            read_time_label: String::new(),
            image_url: format!(
                "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
                sample.photo
            ),
            status: ContentStatus::Approved,
            story: Some(StoryDetails {
                location: sample.location.to_string(),
                author_location: sample.author_location.to_string(),
                author_age: Some(sample.author_age.to_string()),
                impact: sample.impact.to_string(),
                inspiration: String::new(),
                submitted_at: Some(sample.submitted.to_string()),
            }),
        })
        .collect()
}
