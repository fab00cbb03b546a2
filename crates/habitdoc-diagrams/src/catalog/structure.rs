//! Static structure: architecture, components, deployment, packages, routes

use super::{canvas, column, TITLE};
use crate::palette::*;
use crate::scene::{Anchor, Scene, TextStyle};

pub(super) fn architecture() -> Scene {
    let header = TextStyle::bold(18.0);
    let body = TextStyle::regular(14.0);
    let small = TextStyle::regular(12.0);
    let mut s = canvas(1200, 800, "Архітектура системи Habit Tracker", TITLE, 30.0);

    s.rounded_rect([100.0, 100.0, 450.0, 650.0], SKY, PRIMARY, 3.0);
    s.centered((275.0, 120.0), "Frontend (React)", header, TEXT);
    let pages = [
        ("App.jsx", 160.0),
        ("Layout.jsx", 210.0),
        ("Login.jsx", 260.0),
        ("Dashboard.jsx", 310.0),
        ("Goals.jsx", 360.0),
        ("Progress.jsx", 410.0),
    ];
    for (page, y) in pages {
        s.rounded_rect([120.0, y, 430.0, y + 35.0], BG, PRIMARY, 2.0);
        s.centered((275.0, y + 17.0), page, body, TEXT);
    }
    s.rounded_rect([120.0, 470.0, 430.0, 520.0], AMBER, ACCENT, 2.0);
    s.centered((275.0, 495.0), "Zustand Store (State)", body, TEXT);
    s.rounded_rect([120.0, 560.0, 430.0, 610.0], MINT, SECONDARY, 2.0);
    s.centered((275.0, 585.0), "Axios API Client", body, TEXT);

    s.rounded_rect([750.0, 100.0, 1100.0, 650.0], AMBER, ACCENT, 3.0);
    s.centered((925.0, 120.0), "Backend (Spring Boot)", header, TEXT);
    let layers = [
        (
            "Controllers",
            160.0,
            PRIMARY,
            ["AuthController", "GoalController", "ProgressController"],
        ),
        (
            "Services",
            260.0,
            SECONDARY,
            ["AuthService", "GoalService", "ProgressService"],
        ),
        (
            "Repositories",
            360.0,
            ACCENT,
            ["UserRepository", "GoalRepository", "ProgressRepository"],
        ),
    ];
    for (layer, y, color, classes) in layers {
        s.rounded_rect([770.0, y, 1080.0, y + 80.0], BG, color, 2.0);
        s.centered((925.0, y + 15.0), layer, header, TEXT);
        for (i, class) in classes.iter().enumerate() {
            s.text((780.0 + 100.0 * i as f32, y + 45.0), class, small, TEXT);
        }
    }
    s.rounded_rect([770.0, 470.0, 1080.0, 520.0], ROSE, PINK, 2.0);
    s.centered((925.0, 495.0), "Spring Security + JWT", body, TEXT);
    s.rounded_rect([770.0, 560.0, 1080.0, 610.0], MINT, SECONDARY, 2.0);
    s.centered((925.0, 585.0), "MongoDB", body, TEXT);

    // frontend -> backend
    s.line(&[(450.0, 400.0), (750.0, 400.0)], BORDER, 3.0);
    s.polygon(&[(750.0, 400.0), (735.0, 395.0), (735.0, 405.0)], BORDER);
    s.centered((600.0, 380.0), "HTTP/REST API", small, TEXT);
    s.centered((600.0, 410.0), "(JSON)", small, TEXT);

    // backend -> database
    s.line(&[(925.0, 440.0), (925.0, 560.0)], BORDER, 3.0);
    s.polygon(&[(925.0, 560.0), (920.0, 545.0), (930.0, 545.0)], BORDER);

    s.centered(
        (600.0, 700.0),
        "Розроблено для курсової роботи - Habit Tracker Web System",
        small,
        BORDER,
    );
    s
}

pub(super) fn components() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(12.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(
        1100,
        850,
        "Діаграма компонентів - Frontend React",
        TITLE,
        30.0,
    );

    s.rounded_rect([80.0, 80.0, 1020.0, 780.0], ICE, PRIMARY, 3.0);
    s.centered((550.0, 100.0), "App.jsx", header, TEXT);

    s.rounded_rect([100.0, 140.0, 1000.0, 240.0], SKY, PRIMARY, 2.0);
    s.centered((550.0, 160.0), "Layout.jsx", header, TEXT);
    column(
        &mut s,
        (120.0, 190.0),
        20.0,
        &["• Navigation Bar", "• User Menu & Logout"],
        body,
        TEXT,
    );

    let columns: [(f32, f32, &str, &str, &[(&str, f32, [&str; 3])]); 3] = [
        (
            100.0,
            280.0,
            AMBER,
            ACCENT,
            &[
                (
                    "Login.jsx",
                    280.0,
                    [
                        "• Email/Password form",
                        "• JWT authentication",
                        "• Redirect on success",
                    ],
                ),
                (
                    "Register.jsx",
                    400.0,
                    [
                        "• User registration",
                        "• Email validation",
                        "• Password strength",
                    ],
                ),
                (
                    "Dashboard.jsx",
                    520.0,
                    ["• Goal statistics", "• Recent activity", "• Quick actions"],
                ),
            ],
        ),
        (
            420.0,
            280.0,
            MINT,
            SECONDARY,
            &[
                (
                    "Goals.jsx",
                    280.0,
                    ["• Goal list view", "• Filter & search", "• Create new goal"],
                ),
                (
                    "GoalDetail.jsx",
                    400.0,
                    ["• Goal information", "• Progress chart", "• Update/Delete"],
                ),
                (
                    "Achievements.jsx",
                    520.0,
                    ["• Earned badges", "• Progress stats", "• Milestones"],
                ),
            ],
        ),
        (
            740.0,
            250.0,
            ROSE,
            PINK,
            &[
                (
                    "Groups.jsx",
                    280.0,
                    ["• Group list", "• Join/Create group", "• Search groups"],
                ),
                (
                    "GroupDetail.jsx",
                    400.0,
                    ["• Group info", "• Members list", "• Shared activity"],
                ),
            ],
        ),
    ];
    for (x, width, fill, outline, pages) in columns {
        for (name, y, notes) in pages {
            s.rounded_rect([x, *y, x + width, y + 100.0], fill, outline, 2.0);
            s.centered((x + width / 2.0, y + 15.0), name, header, TEXT);
            column(&mut s, (x + 10.0, y + 40.0), 15.0, notes, small, TEXT);
        }
    }

    s.rounded_rect([100.0, 650.0, 480.0, 740.0], AMBER, ACCENT, 3.0);
    s.centered((290.0, 670.0), "Zustand Store", header, TEXT);
    column(
        &mut s,
        (110.0, 695.0),
        20.0,
        &["• authStore (user, tokens)", "• Persist to localStorage"],
        body,
        TEXT,
    );

    s.rounded_rect([520.0, 650.0, 1000.0, 740.0], MINT, SECONDARY, 3.0);
    s.centered((760.0, 670.0), "API Clients (Axios)", header, TEXT);
    column(
        &mut s,
        (530.0, 695.0),
        20.0,
        &[
            "• auth.js   • goals.js   • groups.js",
            "• achievements.js   • client.js (base)",
        ],
        body,
        TEXT,
    );

    s.line(&[(550.0, 240.0), (550.0, 280.0)], BORDER, 2.0);
    s.polygon(&[(550.0, 280.0), (545.0, 265.0), (555.0, 265.0)], BORDER);
    s
}

pub(super) fn deployment() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(13.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(1200, 900, "Діаграма розгортання системи", TITLE, 30.0);

    // client
    s.rounded_rect([80.0, 100.0, 380.0, 350.0], SKY, PRIMARY, 3.0);
    s.centered((230.0, 120.0), "Client Device", header, TEXT);
    s.rounded_rect([100.0, 160.0, 360.0, 320.0], WHITE, PRIMARY, 2.0);
    s.centered((230.0, 180.0), "Web Browser", header, TEXT);
    s.rounded_rect([120.0, 220.0, 340.0, 300.0], AMBER, ACCENT, 2.0);
    s.centered((230.0, 240.0), "React SPA", body, TEXT);
    column(
        &mut s,
        (130.0, 265.0),
        15.0,
        &["• Vite bundled", "• Tailwind CSS"],
        small,
        TEXT,
    );

    // web server
    s.rounded_rect([480.0, 100.0, 780.0, 400.0], AMBER, ACCENT, 3.0);
    s.centered((630.0, 120.0), "Web Server", header, TEXT);
    s.rounded_rect([500.0, 160.0, 760.0, 240.0], WHITE, SECONDARY, 2.0);
    s.centered((630.0, 180.0), "Nginx", header, TEXT);
    column(
        &mut s,
        (510.0, 205.0),
        15.0,
        &["• Reverse proxy", "• Static files serving"],
        small,
        TEXT,
    );
    s.rounded_rect([500.0, 260.0, 760.0, 380.0], SKY, PRIMARY, 2.0);
    s.centered((630.0, 280.0), "Docker Container", header, TEXT);
    s.rounded_rect([520.0, 310.0, 740.0, 360.0], MINT, SECONDARY, 2.0);
    s.centered((630.0, 335.0), "Spring Boot App", body, TEXT);

    // database server
    s.rounded_rect([880.0, 100.0, 1120.0, 400.0], MINT, SECONDARY, 3.0);
    s.centered((1000.0, 120.0), "Database Server", header, TEXT);
    s.rounded_rect([900.0, 160.0, 1100.0, 280.0], WHITE, SECONDARY, 2.0);
    s.centered((1000.0, 180.0), "MongoDB", header, TEXT);
    s.text((910.0, 210.0), "Collections:", small, TEXT);
    column(
        &mut s,
        (920.0, 230.0),
        15.0,
        &["• users", "• goals", "• progress"],
        small,
        TEXT,
    );
    s.rounded_rect([900.0, 300.0, 1100.0, 370.0], AMBER, ACCENT, 2.0);
    s.centered((1000.0, 320.0), "Docker Volume", body, TEXT);
    s.text((910.0, 345.0), "/data/db (persistent)", small, TEXT);

    // network
    s.rounded_rect([480.0, 480.0, 1120.0, 600.0], ICE, BORDER, 3.0);
    s.centered(
        (800.0, 500.0),
        "Docker Network: habit-tracker-net",
        header,
        TEXT,
    );
    s.text(
        (500.0, 530.0),
        "• Bridge network for container communication",
        body,
        TEXT,
    );
    s.text((500.0, 555.0), "• Internal DNS resolution", body, TEXT);
    s.text(
        (500.0, 575.0),
        "• Port mapping: 8080:8080 (backend), 27017:27017 (mongodb)",
        small,
        TEXT,
    );

    s.line(&[(380.0, 225.0), (480.0, 225.0)], PRIMARY, 3.0);
    s.polygon(&[(480.0, 225.0), (465.0, 220.0), (465.0, 230.0)], PRIMARY);
    s.centered((430.0, 205.0), "HTTP/HTTPS", small, TEXT);

    s.line(&[(780.0, 300.0), (880.0, 220.0)], SECONDARY, 3.0);
    s.polygon(&[(880.0, 220.0), (865.0, 220.0), (875.0, 230.0)], SECONDARY);
    s.centered((830.0, 250.0), "MongoDB", small, TEXT);
    s.centered((830.0, 265.0), "Protocol", small, TEXT);

    s.rounded_rect([80.0, 680.0, 1120.0, 850.0], SNOW, BORDER, 2.0);
    s.centered(
        (600.0, 700.0),
        "Технології та інструменти розгортання",
        header,
        TEXT,
    );
    let tools = [
        "• Docker & Docker Compose для контейнеризації",
        "• Nginx як reverse proxy та для статичних файлів",
        "• MongoDB в Docker контейнері з persistent volume",
        "• Spring Boot JAR у Docker контейнері",
        "• React SPA побудований з Vite та розміщений через Nginx",
        "• Docker networks для ізоляції та комунікації",
        "• Environment variables для конфігурації",
        "• Health checks для моніторингу стану сервісів",
    ];
    // two columns, row-major
    for (i, tool) in tools.iter().enumerate() {
        let (row, col) = ((i / 2) as f32, (i % 2) as f32);
        s.text((100.0 + col * 520.0, 730.0 + row * 25.0), tool, small, TEXT);
    }
    s
}

pub(super) fn packages() -> Scene {
    let header = TextStyle::bold(15.0);
    let small = TextStyle::regular(10.0);
    let mut s = canvas(
        1100,
        900,
        "Діаграма пакетів - Backend структура",
        TITLE,
        30.0,
    );

    s.rounded_rect([50.0, 70.0, 1050.0, 830.0], SNOW, BORDER, 3.0);
    s.centered((550.0, 95.0), "com.example.cwweb", header, TEXT);

    let packages: [([f32; 4], &str, &str, &str, &[&str]); 7] = [
        (
            [80.0, 130.0, 330.0, 280.0],
            SKY,
            PRIMARY,
            "config",
            &[
                "SecurityConfig.java",
                "JwtAuthFilter.java",
                "JwtUtils.java",
                "CorsConfig.java",
                "MongoConfig.java",
            ],
        ),
        (
            [360.0, 130.0, 690.0, 280.0],
            AMBER,
            ACCENT,
            "auth",
            &[
                "AuthController.java",
                "AuthService.java",
                "SignupRequest.java",
                "LoginRequest.java",
                "AuthResponse.java",
            ],
        ),
        (
            [720.0, 130.0, 1020.0, 280.0],
            MINT,
            SECONDARY,
            "users",
            &[
                "User.java",
                "UserRepository.java",
                "UserService.java",
                "UserRole.java",
                "UserStatus.java",
            ],
        ),
        (
            [80.0, 310.0, 400.0, 530.0],
            ROSE,
            PINK,
            "goals",
            &[
                "GoalController.java",
                "GoalService.java",
                "GoalRepository.java",
                "Goal.java",
                "CreateGoalRequest.java",
                "UpdateGoalRequest.java",
                "GoalStatus.java",
                "Frequency.java",
                "GoalResponse.java",
            ],
        ),
        (
            [430.0, 310.0, 750.0, 490.0],
            SKY,
            PRIMARY,
            "progress",
            &[
                "ProgressController.java",
                "ProgressService.java",
                "ProgressRepository.java",
                "Progress.java",
                "ProgressRequest.java",
                "GoalStats.java",
            ],
        ),
        (
            [80.0, 560.0, 430.0, 780.0],
            MINT,
            SECONDARY,
            "groups",
            &[
                "GroupController.java",
                "GroupService.java",
                "GroupRepository.java",
                "Group.java",
                "GroupMembership.java",
                "GroupMembershipRepo.java",
                "CreateGroupRequest.java",
                "Visibility.java",
                "MembershipRole.java",
            ],
        ),
        (
            [460.0, 520.0, 750.0, 700.0],
            AMBER,
            ACCENT,
            "achievements",
            &[
                "AchievementCtrl.java",
                "AchievementSvc.java",
                "AchievementRepo.java",
                "Achievement.java",
                "AchievementType.java",
                "UserAchievement.java",
            ],
        ),
    ];
    for (bounds, fill, outline, name, classes) in packages {
        package(&mut s, bounds, fill, outline, name, classes, header, small);
    }
    package(
        &mut s,
        [780.0, 310.0, 1020.0, 470.0],
        SNOW,
        BORDER,
        "common",
        &[
            "ApiResponse.java",
            "ErrorResponse.java",
            "ValidationUtils.java",
            "DateUtils.java",
            "Constants.java",
        ],
        header,
        small,
    );

    // auth -> users
    s.line(&[(690.0, 205.0), (720.0, 205.0)], BORDER, 2.0);
    s.polygon(&[(720.0, 205.0), (705.0, 200.0), (705.0, 210.0)], BORDER);
    // goals -> users
    s.line(&[(400.0, 350.0), (780.0, 200.0)], BORDER, 2.0);
    s.polygon(&[(780.0, 200.0), (765.0, 205.0), (775.0, 195.0)], BORDER);
    // progress -> goals
    s.line(&[(430.0, 400.0), (400.0, 400.0)], BORDER, 2.0);
    s.polygon(&[(400.0, 400.0), (415.0, 395.0), (415.0, 405.0)], BORDER);
    // groups -> users
    s.line(&[(430.0, 620.0), (800.0, 280.0)], BORDER, 2.0);
    s.polygon(&[(800.0, 280.0), (785.0, 285.0), (795.0, 275.0)], BORDER);
    s
}

#[allow(clippy::too_many_arguments)]
fn package(
    s: &mut Scene,
    bounds: [f32; 4],
    fill: &str,
    outline: &str,
    name: &str,
    classes: &[&str],
    header: TextStyle,
    small: TextStyle,
) {
    let [x1, y1, x2, _] = bounds;
    s.rounded_rect(bounds, fill, outline, 2.0);
    s.centered(((x1 + x2) / 2.0, y1 + 25.0), name, header, TEXT);
    let items: Vec<String> = classes.iter().map(|c| format!("• {c}")).collect();
    let items: Vec<&str> = items.iter().map(String::as_str).collect();
    column(s, (x1 + 20.0, y1 + 55.0), 17.0, &items, small, TEXT);
}

pub(super) fn routing() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(13.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(
        1000,
        900,
        "Діаграма роутингу - React Router v6",
        TITLE,
        30.0,
    );

    s.rounded_rect([350.0, 80.0, 650.0, 140.0], PRIMARY, PRIMARY, 3.0);
    s.centered((500.0, 110.0), "/ (App Root)", header, WHITE);

    s.rounded_rect([50.0, 200.0, 450.0, 440.0], SKY, PRIMARY, 3.0);
    s.centered((250.0, 225.0), "Public Routes (Unauthorized)", header, TEXT);
    let public = [
        ("/login", "Login.jsx", "Сторінка входу"),
        ("/register", "Register.jsx", "Реєстрація користувача"),
        ("/", "Landing Page", "Головна сторінка"),
    ];
    for (i, route) in public.iter().enumerate() {
        let y = 265.0 + 55.0 * i as f32;
        route_card(&mut s, 70.0, y, PRIMARY, *route, body, small);
    }

    s.rounded_rect([550.0, 200.0, 950.0, 800.0], MINT, SECONDARY, 3.0);
    s.centered(
        (750.0, 225.0),
        "Protected Routes (Authorized)",
        header,
        TEXT,
    );
    let protected = [
        ("/dashboard", "Dashboard.jsx", "Панель управління"),
        ("/goals", "Goals.jsx", "Список цілей"),
        ("/goals/:id", "GoalDetail.jsx", "Деталі цілі"),
        ("/achievements", "Achievements.jsx", "Досягнення"),
        ("/groups", "Groups.jsx", "Список груп"),
        ("/groups/:id", "GroupDetail.jsx", "Деталі групи"),
        ("/profile", "Profile.jsx", "Профіль користувача"),
        ("/settings", "Settings.jsx", "Налаштування"),
    ];
    for (i, route) in protected.iter().enumerate() {
        let y = 265.0 + 60.0 * i as f32;
        route_card(&mut s, 570.0, y, SECONDARY, *route, body, small);
    }

    s.rounded_rect([50.0, 480.0, 450.0, 640.0], AMBER, ACCENT, 3.0);
    s.centered((250.0, 505.0), "Route Guards & Navigation", header, TEXT);
    column(
        &mut s,
        (70.0, 540.0),
        20.0,
        &[
            "• PrivateRoute wrapper",
            "• JWT token перевірка",
            "• Redirect to /login якщо не авторизований",
            "• Redirect to /dashboard після логіну",
            "• React Router Navigate",
        ],
        body,
        TEXT,
    );

    s.rounded_rect([50.0, 680.0, 450.0, 800.0], ROSE, PINK, 3.0);
    s.centered((250.0, 705.0), "Error Handling", header, TEXT);
    let errors = [
        ("/404", "NotFound.jsx", "Сторінка не знайдена"),
        ("/403", "Forbidden.jsx", "Доступ заборонено"),
        ("*", "NotFound.jsx", "Catch-all route"),
    ];
    for (i, (route, page, note)) in errors.iter().enumerate() {
        let y = 740.0 + 20.0 * i as f32;
        s.text((70.0, y), &format!("{route} → {page}"), small, TEXT);
        s.text((280.0, y), note, small, BORDER);
    }

    s.line(&[(500.0, 140.0), (250.0, 200.0)], BORDER, 2.0);
    s.polygon(&[(250.0, 200.0), (255.0, 185.0), (245.0, 185.0)], BORDER);
    s.line(&[(500.0, 140.0), (750.0, 200.0)], BORDER, 2.0);
    s.polygon(&[(750.0, 200.0), (755.0, 185.0), (745.0, 185.0)], BORDER);
    s
}

fn route_card(
    s: &mut Scene,
    x: f32,
    y: f32,
    accent: &str,
    (route, page, note): (&str, &str, &str),
    body: TextStyle,
    small: TextStyle,
) {
    s.rounded_rect([x, y, x + 360.0, y + 45.0], WHITE, accent, 2.0);
    s.label(
        Anchor::LeftMiddle,
        (x + 20.0, y + 10.0),
        route,
        body,
        accent,
    );
    s.label(
        Anchor::LeftMiddle,
        (x + 20.0, y + 28.0),
        &format!("→ {page}"),
        small,
        TEXT,
    );
    s.label(
        Anchor::LeftMiddle,
        (x + 180.0, y + 28.0),
        note,
        small,
        BORDER,
    );
}
