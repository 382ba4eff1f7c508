use super::PostSeed;

pub static POSTS: [PostSeed; 3] = [
    PostSeed {
        title: "Mastering DSA Patterns for Competitive Programming",
        excerpt: "Learn the most common patterns in Data Structures and Algorithms to ace your coding interviews.",
        tags: &["DSA", "Competitive Programming", "Algorithms"],
        read_time: "8 min",
        date: "March 1, 2024",
        image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?auto=format&fit=crop&q=80&w=800",
    },
    PostSeed {
        title: "AI in Modern Web Development",
        excerpt: "Exploring how artificial intelligence is transforming the landscape of web development.",
        tags: &["AI", "Web Development", "Technology"],
        read_time: "6 min",
        date: "February 28, 2024",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800",
    },
    PostSeed {
        title: "Understanding the TCP Handshake",
        excerpt: "A deep dive into how TCP establishes connections and its role in web servers.",
        tags: &["Networking", "Web Servers", "Backend"],
        read_time: "10 min",
        date: "February 25, 2024",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?auto=format&fit=crop&q=80&w=800",
    },
];
