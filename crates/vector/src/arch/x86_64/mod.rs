// Copyright 2024-2025 Irreducible Inc.

mod gfni;
