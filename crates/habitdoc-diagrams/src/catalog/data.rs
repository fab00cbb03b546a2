//! Data model diagrams: collections, backend classes, REST endpoints

use super::{canvas, column, TITLE};
use crate::palette::*;
use crate::scene::{Scene, TextStyle};

/// Tinted box with a solid header bar in the outline colour
fn entity(s: &mut Scene, bounds: [f32; 4], bar: f32, tint: &str, accent: &str) {
    let [x1, y1, x2, _] = bounds;
    s.rounded_rect(bounds, tint, accent, 3.0);
    s.rounded_rect([x1, y1, x2, y1 + bar], accent, accent, 3.0);
}

pub(super) fn er_diagram() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(12.0);
    let small = TextStyle::regular(11.0);
    let mut s = canvas(1100, 750, "ER Діаграма - Модель даних MongoDB", TITLE, 30.0);

    let collections: [(f32, f32, f32, f32, &str, &str, &str, &[&str]); 4] = [
        (
            150.0,
            150.0,
            250.0,
            250.0,
            SKY,
            PRIMARY,
            "User",
            &[
                "id: String (PK)",
                "email: String (unique)",
                "passwordHash: String",
                "displayName: String",
                "role: Enum",
                "status: Enum",
                "createdAt: DateTime",
                "updatedAt: DateTime",
            ],
        ),
        (
            550.0,
            150.0,
            250.0,
            300.0,
            AMBER,
            ACCENT,
            "Goal",
            &[
                "id: String (PK)",
                "userId: String (FK)",
                "title: String",
                "description: String",
                "frequency: Enum",
                "startDate: Date",
                "endDate: Date",
                "isPublic: Boolean",
                "status: Enum",
                "createdAt: DateTime",
                "updatedAt: DateTime",
            ],
        ),
        (
            850.0,
            480.0,
            220.0,
            200.0,
            MINT,
            SECONDARY,
            "Progress",
            &[
                "id: String (PK)",
                "goalId: String (FK)",
                "userId: String (FK)",
                "date: Date",
                "completed: Boolean",
                "notes: String",
                "createdAt: DateTime",
            ],
        ),
        (
            150.0,
            480.0,
            250.0,
            200.0,
            ROSE,
            PINK,
            "Group",
            &[
                "id: String (PK)",
                "name: String",
                "description: String",
                "ownerId: String (FK)",
                "memberIds: Array<String>",
                "visibility: Enum",
                "createdAt: DateTime",
            ],
        ),
    ];
    for (x, y, w, h, tint, accent, name, fields) in collections {
        entity(&mut s, [x, y, x + w, y + h], 40.0, tint, accent);
        s.centered((x + w / 2.0, y + 20.0), name, header, WHITE);
        column(&mut s, (x + 10.0, y + 60.0), 22.0, fields, body, TEXT);
    }

    // user -> goal
    s.line(&[(400.0, 250.0), (550.0, 250.0)], BORDER, 2.0);
    s.polygon(&[(550.0, 250.0), (535.0, 245.0), (535.0, 255.0)], BORDER);
    s.centered((475.0, 230.0), "1:N", small, TEXT);
    s.centered((475.0, 265.0), "has", small, TEXT);

    // goal -> progress
    s.line(
        &[(700.0, 450.0), (700.0, 520.0), (850.0, 520.0)],
        BORDER,
        2.0,
    );
    s.polygon(&[(850.0, 520.0), (835.0, 515.0), (835.0, 525.0)], BORDER);
    s.centered((775.0, 505.0), "1:N", small, TEXT);

    // user -> group
    s.line(&[(275.0, 400.0), (275.0, 480.0)], BORDER, 2.0);
    s.polygon(&[(275.0, 480.0), (270.0, 465.0), (280.0, 465.0)], BORDER);
    s.centered((250.0, 440.0), "1:N", small, TEXT);
    s.centered((310.0, 440.0), "owns", small, TEXT);

    s.centered((550.0, 720.0), "Структура колекцій MongoDB", body, BORDER);
    s
}

pub(super) fn class_diagram() -> Scene {
    let header = TextStyle::bold(14.0);
    let body = TextStyle::regular(11.0);
    let small = TextStyle::regular(10.0);
    let mut s = canvas(
        1200,
        900,
        "Діаграма класів - Backend (Spring Boot)",
        TITLE,
        30.0,
    );

    // controller, service, repository side by side
    let tiers: [(f32, f32, &str, &str, &str, &str, &[&str], f32); 3] = [
        (
            80.0,
            220.0,
            SKY,
            PRIMARY,
            "«Controller»\nGoalController",
            "- goalService: GoalService",
            &[
                "+ createGoal(request): Goal",
                "+ getGoals(): List<Goal>",
                "+ getGoalById(id): Goal",
                "+ updateGoal(id, req): Goal",
                "+ deleteGoal(id): void",
            ],
            18.0,
        ),
        (
            480.0,
            220.0,
            AMBER,
            ACCENT,
            "«Service»\nGoalService",
            "- goalRepo: GoalRepository",
            &[
                "+ createGoal(userId, req): Goal",
                "+ findByUserId(userId): List",
                "+ findById(id): Optional<Goal>",
                "+ updateGoal(id, req): Goal",
                "+ deleteGoal(id): void",
            ],
            18.0,
        ),
        (
            880.0,
            180.0,
            MINT,
            SECONDARY,
            "«Interface»\nGoalRepository",
            "extends MongoRepository",
            &[
                "+ findByUserId(userId): List",
                "+ findByUserIdAndStatus(): List",
                "+ findByIsPublicTrue(): List",
            ],
            25.0,
        ),
    ];
    for (i, (x, h, tint, accent, name, field, methods, step)) in tiers.into_iter().enumerate() {
        let y = 100.0;
        entity(&mut s, [x, y, x + 280.0, y + h], 35.0, tint, accent);
        s.centered((x + 140.0, y + 17.0), name, header, WHITE);
        s.line(&[(x, y + 35.0), (x + 280.0, y + 35.0)], accent, 2.0);
        // the repository's supertype is set smaller
        let field_style = if i == 2 { small } else { body };
        s.text((x + 10.0, y + 45.0), field, field_style, TEXT);
        s.line(&[(x, y + 70.0), (x + 280.0, y + 70.0)], accent, 2.0);
        column(&mut s, (x + 10.0, y + 80.0), step, methods, body, TEXT);
    }

    // goal entity
    let (x, y) = (480.0, 420.0);
    entity(&mut s, [x, y, x + 280.0, y + 380.0], 35.0, ROSE, PINK);
    s.centered((x + 140.0, y + 17.0), "«Entity»\nGoal", header, WHITE);
    s.line(&[(x, y + 35.0), (x + 280.0, y + 35.0)], PINK, 2.0);
    column(
        &mut s,
        (x + 10.0, y + 45.0),
        18.0,
        &[
            "- id: String",
            "- userId: String",
            "- title: String",
            "- description: String",
            "- frequency: Frequency",
            "- startDate: LocalDate",
            "- endDate: LocalDate",
            "- isPublic: boolean",
            "- status: GoalStatus",
            "- createdAt: LocalDateTime",
            "- updatedAt: LocalDateTime",
        ],
        body,
        TEXT,
    );
    s.line(&[(x, y + 250.0), (x + 280.0, y + 250.0)], PINK, 2.0);
    column(
        &mut s,
        (x + 10.0, y + 260.0),
        20.0,
        &[
            "+ getId(): String",
            "+ setId(id): void",
            "+ getTitle(): String",
            "+ setTitle(title): void",
            "...",
        ],
        body,
        TEXT,
    );

    s.line(&[(360.0, 200.0), (480.0, 200.0)], BORDER, 2.0);
    s.polygon(&[(480.0, 200.0), (465.0, 195.0), (465.0, 205.0)], BORDER);
    s.centered((420.0, 180.0), "uses", small, TEXT);

    s.line(&[(760.0, 200.0), (880.0, 200.0)], BORDER, 2.0);
    s.polygon(&[(880.0, 200.0), (865.0, 195.0), (865.0, 205.0)], BORDER);
    s.centered((820.0, 180.0), "uses", small, TEXT);

    s.line(&[(620.0, 320.0), (620.0, 420.0)], BORDER, 2.0);
    s.polygon(&[(620.0, 420.0), (615.0, 405.0), (625.0, 405.0)], BORDER);
    s.centered((640.0, 370.0), "manages", small, TEXT);

    s.line(
        &[(1020.0, 280.0), (1020.0, 600.0), (760.0, 600.0)],
        BORDER,
        2.0,
    );
    s.polygon(&[(760.0, 600.0), (775.0, 595.0), (775.0, 605.0)], BORDER);
    s.centered((890.0, 580.0), "persists", small, TEXT);

    s.centered(
        (600.0, 860.0),
        "Структура класів шару Backend з залежностями",
        body,
        BORDER,
    );
    s
}

/// HTTP verb badge colour
fn verb_color(method: &str) -> &'static str {
    match method {
        "POST" => SECONDARY,
        "GET" => PRIMARY,
        "PUT" => ACCENT,
        _ => RED,
    }
}

type Endpoint = (&'static str, &'static str, &'static str, &'static str);

pub(super) fn api_endpoints() -> Scene {
    let header = TextStyle::bold(16.0);
    let body = TextStyle::regular(11.0);
    let small = TextStyle::regular(10.0);
    let mut s = canvas(
        1200,
        1000,
        "REST API Endpoints - Habit Tracker",
        TITLE,
        30.0,
    );

    s.rounded_rect([350.0, 70.0, 850.0, 110.0], SKY, PRIMARY, 2.0);
    s.centered(
        (600.0, 90.0),
        "Base URL: http://localhost:8080/api",
        header,
        TEXT,
    );

    let groups: [(f32, f32, &str, &str, &str, &[Endpoint]); 4] = [
        (
            140.0,
            180.0,
            AMBER,
            ACCENT,
            "/auth - Автентифікація",
            &[
                (
                    "POST",
                    "/auth/signup",
                    "Реєстрація користувача",
                    "SignupRequest → AuthResponse",
                ),
                (
                    "POST",
                    "/auth/login",
                    "Вхід в систему",
                    "LoginRequest → AuthResponse + JWT",
                ),
                (
                    "POST",
                    "/auth/refresh",
                    "Оновлення токена",
                    "RefreshRequest → TokenResponse",
                ),
                ("POST", "/auth/logout", "Вихід з системи", "- → Success"),
            ],
        ),
        (
            340.0,
            240.0,
            MINT,
            SECONDARY,
            "/goals - Управління цілями",
            &[
                (
                    "GET",
                    "/goals",
                    "Список цілей користувача",
                    "- → List<Goal>",
                ),
                (
                    "POST",
                    "/goals",
                    "Створення нової цілі",
                    "CreateGoalRequest → Goal",
                ),
                ("GET", "/goals/{id}", "Деталі цілі", "- → Goal"),
                (
                    "PUT",
                    "/goals/{id}",
                    "Оновлення цілі",
                    "UpdateGoalRequest → Goal",
                ),
                ("DELETE", "/goals/{id}", "Видалення цілі", "- → void"),
                (
                    "GET",
                    "/goals/public",
                    "Публічні цілі",
                    "?page=0&size=20 → Page<Goal>",
                ),
            ],
        ),
        (
            600.0,
            150.0,
            ROSE,
            PINK,
            "/progress - Логування прогресу",
            &[
                (
                    "GET",
                    "/progress/goal/{goalId}",
                    "Прогрес по цілі",
                    "- → List<Progress>",
                ),
                (
                    "POST",
                    "/progress",
                    "Логування прогресу",
                    "ProgressRequest → Progress",
                ),
                (
                    "GET",
                    "/progress/stats/{goalId}",
                    "Статистика цілі",
                    "- → GoalStats",
                ),
            ],
        ),
        (
            770.0,
            180.0,
            SKY,
            PRIMARY,
            "/groups - Групи користувачів",
            &[
                ("GET", "/groups", "Список груп", "- → List<Group>"),
                (
                    "POST",
                    "/groups",
                    "Створення групи",
                    "CreateGroupRequest → Group",
                ),
                (
                    "POST",
                    "/groups/join",
                    "Приєднання до групи",
                    "JoinRequest → Membership",
                ),
                (
                    "GET",
                    "/groups/{id}/members",
                    "Члени групи",
                    "- → List<Member>",
                ),
            ],
        ),
    ];
    for (y, h, tint, accent, title, endpoints) in groups {
        s.rounded_rect([50.0, y, 1150.0, y + h], tint, accent, 3.0);
        s.centered((600.0, y + 20.0), title, header, TEXT);
        for (i, (method, path, summary, shape)) in endpoints.iter().enumerate() {
            let row = y + 50.0 + 30.0 * i as f32;
            let color = verb_color(method);
            s.rounded_rect([70.0, row, 140.0, row + 20.0], color, color, 1.0);
            s.centered((105.0, row + 10.0), method, small, WHITE);
            s.text((160.0, row + 10.0), path, body, TEXT);
            s.text((450.0, row + 10.0), summary, small, TEXT);
            s.text((800.0, row + 10.0), shape, small, BORDER);
        }
    }
    s
}
